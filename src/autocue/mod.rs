//! Genre-informed automatic hot cue placement
//!
//! Places "Phrase N" cues at the first phrase boundaries of the track and,
//! for dnb, "Drop N" / "Pre-Drop N" cues around detected energy jumps. A
//! heuristic, not a structure detector: false positives are acceptable, the
//! result only has to be deterministic for a given buffer and config.

mod drops;
mod genre;

pub use drops::detect_drops;
pub use genre::{Genre, GenreHint};

use crate::audio::SampleBuffer;
use crate::model::HotCueStore;

const BEATS_PER_BAR: u32 = 4;

/// Number of leading phrases that get a "Phrase N" cue
const MAX_PHRASE_CUES: usize = 4;

/// Tuning knobs for automatic cue placement
#[derive(Debug, Clone)]
pub struct AutoCueConfig {
    /// Genre to use for placement rules, or Auto to infer from BPM
    pub genre: GenreHint,

    /// Bars per phrase (16 for most electronic genres)
    pub phrase_length: u32,

    /// Wipe user cues before placing automatic ones
    pub clear_existing: bool,

    /// Also place a cue two phrases ahead of each drop
    pub include_pre_drop: bool,

    /// Hard cap on total cues after placement
    pub max_cues: usize,
}

impl Default for AutoCueConfig {
    fn default() -> Self {
        Self {
            genre: GenreHint::Auto,
            phrase_length: 16,
            clear_existing: true,
            include_pre_drop: true,
            max_cues: 8,
        }
    }
}

impl AutoCueConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the genre hint.
    pub fn with_genre(mut self, genre: GenreHint) -> Self {
        self.genre = genre;
        self
    }

    /// Set the phrase length in bars.
    pub fn with_phrase_length(mut self, bars: u32) -> Self {
        self.phrase_length = bars;
        self
    }

    /// Keep or clear existing cues before placement.
    pub fn with_clear_existing(mut self, clear: bool) -> Self {
        self.clear_existing = clear;
        self
    }

    /// Enable or disable pre-drop cues.
    pub fn with_pre_drop(mut self, enable: bool) -> Self {
        self.include_pre_drop = enable;
        self
    }

    /// Set the cue cap.
    pub fn with_max_cues(mut self, max: usize) -> Self {
        self.max_cues = max;
        self
    }
}

/// Place automatic hot cues into the store.
///
/// Returns the ids of the cues that survive in the store. With an unknown
/// tempo (bpm 0) the whole operation is skipped and the store is left
/// untouched; missing tempo data must not wipe user cues.
pub fn auto_set_hot_cues(
    buffer: &SampleBuffer,
    bpm: u32,
    store: &mut HotCueStore,
    config: &AutoCueConfig,
) -> Vec<u64> {
    if bpm == 0 || config.phrase_length == 0 {
        log::debug!("Skipping auto-cue (bpm={}, phrase_length={})", bpm, config.phrase_length);
        return Vec::new();
    }

    if config.clear_existing {
        store.clear();
    }

    let genre = config.genre.resolve(bpm);
    let duration = buffer.duration_seconds();

    let seconds_per_beat = 60.0 / bpm as f64;
    let seconds_per_bar = BEATS_PER_BAR as f64 * seconds_per_beat;
    let seconds_per_phrase = config.phrase_length as f64 * seconds_per_bar;

    let total_phrases = (duration / seconds_per_phrase).floor() as usize;

    log::debug!(
        "Auto-cue: genre={}, {:.3}s/bar, {:.1}s/phrase, {} phrase(s)",
        genre,
        seconds_per_bar,
        seconds_per_phrase,
        total_phrases
    );

    let mut created = Vec::new();

    // Cue the start of the first few phrases
    for phrase in 0..total_phrases.min(MAX_PHRASE_CUES) {
        let time = phrase as f64 * seconds_per_phrase;
        if time < duration {
            let label = format!("Phrase {}", phrase + 1);
            created.push(store.create(time, Some(&label)).id);
        }
    }

    // Drop and pre-drop cues are a dnb arrangement convention
    if genre == Genre::Dnb {
        for (index, drop_time) in detect_drops(buffer, bpm).into_iter().enumerate() {
            if drop_time >= duration {
                continue;
            }
            let label = format!("Drop {}", index + 1);
            created.push(store.create(drop_time, Some(&label)).id);

            if config.include_pre_drop {
                let pre_time = (drop_time - 2.0 * seconds_per_phrase).max(0.0);
                let label = format!("Pre-Drop {}", index + 1);
                created.push(store.create(pre_time, Some(&label)).id);
            }
        }
    }

    // Over the cap, phrase cues go first, in store order; drops stay
    if store.len() > config.max_cues {
        let excess = store.len() - config.max_cues;
        let victims: Vec<u64> = store
            .list()
            .iter()
            .filter(|cue| cue.name.starts_with("Phrase"))
            .take(excess)
            .map(|cue| cue.id)
            .collect();
        for id in &victims {
            store.delete(*id);
        }
        created.retain(|id| !victims.contains(id));
    }

    log::info!("Auto-cue placed {} cue(s) ({} genre)", created.len(), genre);
    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_buffer(sample_rate: u32, duration: f64) -> SampleBuffer {
        let total = (duration * sample_rate as f64) as usize;
        SampleBuffer::from_mono(sample_rate, vec![0.3; total])
    }

    #[test]
    fn test_house_phrase_cues() {
        // 128 bpm, 180s: phrase = 16 * 4 * 60/128 = 30s -> cues at 0/30/60/90
        let buffer = flat_buffer(1000, 180.0);
        let mut store = HotCueStore::new(180.0);
        let config = AutoCueConfig::new().with_genre(GenreHint::Fixed(Genre::House));

        let ids = auto_set_hot_cues(&buffer, 128, &mut store, &config);

        assert_eq!(ids.len(), 4);
        let times: Vec<f64> = store.list().iter().map(|c| c.time_seconds).collect();
        for (actual, expected) in times.iter().zip([0.0, 30.0, 60.0, 90.0]) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-9);
        }
        assert!(store.list().iter().all(|c| c.name.starts_with("Phrase")));
    }

    #[test]
    fn test_bpm_zero_is_skipped_without_clearing() {
        let buffer = flat_buffer(1000, 180.0);
        let mut store = HotCueStore::new(180.0);
        store.create(10.0, Some("user cue"));

        let ids = auto_set_hot_cues(&buffer, 0, &mut store, &AutoCueConfig::new());

        assert!(ids.is_empty());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].name, "user cue");
    }

    #[test]
    fn test_clear_existing_replaces_user_cues() {
        let buffer = flat_buffer(1000, 180.0);
        let mut store = HotCueStore::new(180.0);
        store.create(5.0, Some("user cue"));

        auto_set_hot_cues(
            &buffer,
            128,
            &mut store,
            &AutoCueConfig::new().with_genre(GenreHint::Fixed(Genre::House)),
        );

        assert!(store.list().iter().all(|c| c.name.starts_with("Phrase")));
    }

    #[test]
    fn test_keep_existing_appends() {
        let buffer = flat_buffer(1000, 180.0);
        let mut store = HotCueStore::new(180.0);
        store.create(5.0, Some("user cue"));

        auto_set_hot_cues(
            &buffer,
            128,
            &mut store,
            &AutoCueConfig::new()
                .with_genre(GenreHint::Fixed(Genre::House))
                .with_clear_existing(false),
        );

        assert_eq!(store.len(), 5);
        assert_eq!(store.list()[0].name, "user cue");
    }

    #[test]
    fn test_dnb_fallback_drops_and_pre_drops() {
        // Flat 600s buffer at 174 bpm: no energy trigger, fallback drops at
        // bars 32 and 96; 4 phrases + 2 drops + 2 pre-drops = 8 = cap
        let buffer = flat_buffer(1000, 600.0);
        let mut store = HotCueStore::new(600.0);
        let config = AutoCueConfig::new().with_genre(GenreHint::Fixed(Genre::Dnb));

        auto_set_hot_cues(&buffer, 174, &mut store, &config);

        assert_eq!(store.len(), 8);
        let drops: Vec<&str> = store
            .list()
            .iter()
            .filter(|c| c.name.starts_with("Drop"))
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(drops, vec!["Drop 1", "Drop 2"]);

        let seconds_per_beat = 60.0 / 174.0;
        let drop1 = store.list().iter().find(|c| c.name == "Drop 1").unwrap();
        assert_relative_eq!(drop1.time_seconds, 128.0 * seconds_per_beat, epsilon = 1e-9);

        // Pre-drop 1 is two phrases before drop 1, which lands exactly at 0
        let pre1 = store.list().iter().find(|c| c.name == "Pre-Drop 1").unwrap();
        assert_relative_eq!(pre1.time_seconds, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cap_removes_phrase_cues_first() {
        let buffer = flat_buffer(1000, 600.0);
        let mut store = HotCueStore::new(600.0);
        let config = AutoCueConfig::new()
            .with_genre(GenreHint::Fixed(Genre::Dnb))
            .with_max_cues(6);

        let ids = auto_set_hot_cues(&buffer, 174, &mut store, &config);

        assert_eq!(store.len(), 6);
        // The two oldest phrase cues were trimmed; drops survive
        let phrase_count = store.list().iter().filter(|c| c.name.starts_with("Phrase")).count();
        let drop_count = store.list().iter().filter(|c| !c.name.starts_with("Phrase")).count();
        assert_eq!(phrase_count, 2);
        assert_eq!(drop_count, 4);
        // Returned ids match what is actually in the store
        assert_eq!(ids.len(), 6);
        assert!(ids.iter().all(|id| store.find_by_id(*id).is_some()));
    }

    #[test]
    fn test_deterministic_given_same_inputs() {
        let buffer = flat_buffer(1000, 600.0);
        let config = AutoCueConfig::new().with_genre(GenreHint::Fixed(Genre::Dnb));

        let mut store_a = HotCueStore::new(600.0);
        let mut store_b = HotCueStore::new(600.0);
        auto_set_hot_cues(&buffer, 174, &mut store_a, &config);
        auto_set_hot_cues(&buffer, 174, &mut store_b, &config);

        let a: Vec<(f64, &str)> = store_a.list().iter().map(|c| (c.time_seconds, c.name.as_str())).collect();
        let b: Vec<(f64, &str)> = store_b.list().iter().map(|c| (c.time_seconds, c.name.as_str())).collect();
        assert_eq!(a, b);
    }
}
