//! Beat grid tick marks derived from BPM and duration

/// One beat tick on the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeatMarker {
    /// 0-indexed beat number
    pub index: u32,
    /// Beat position in seconds
    pub time_seconds: f64,
    /// Horizontal position as a percentage of the strip width
    pub position_percent: f64,
    /// True for the first beat of each bar (every 4th beat, fixed 4/4)
    pub downbeat: bool,
}

/// Compute one marker per beat for the whole track.
///
/// Produces `floor(bpm/60 * duration)` markers. A bpm of 0 means "unknown"
/// and is frequently fed in from missing analysis data, so it skips the grid
/// entirely instead of erroring.
pub fn beat_grid(bpm: u32, duration_seconds: f64) -> Vec<BeatMarker> {
    if bpm == 0 || duration_seconds <= 0.0 {
        log::debug!("Skipping beat grid (bpm={}, duration={}s)", bpm, duration_seconds);
        return Vec::new();
    }

    let beats_per_second = bpm as f64 / 60.0;
    let total_beats = (beats_per_second * duration_seconds).floor() as u32;

    (0..total_beats)
        .map(|i| {
            let time_seconds = i as f64 / beats_per_second;
            BeatMarker {
                index: i,
                time_seconds,
                position_percent: time_seconds / duration_seconds * 100.0,
                downbeat: i % 4 == 0,
            }
        })
        .collect()
}
