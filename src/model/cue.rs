use serde::{Deserialize, Serialize};

/// A user- or heuristically-placed timestamp marker on the track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotCue {
    /// Unique within the session, assigned from a monotonic counter
    pub id: u64,

    /// Position in seconds, clamped to the track bounds on creation
    pub time_seconds: f64,

    /// Display label, "Cue N" when the user did not name it
    pub name: String,
}

/// Ordered collection of hot cues for the current track
///
/// Order is creation order, not time order. Ids are never reused within a
/// store's lifetime, so a delete followed by a create cannot alias an old
/// cue.
#[derive(Debug, Clone, Default)]
pub struct HotCueStore {
    cues: Vec<HotCue>,
    next_id: u64,
    duration_seconds: f64,
}

impl HotCueStore {
    /// Create an empty store for a track of the given duration.
    pub fn new(duration_seconds: f64) -> Self {
        Self {
            cues: Vec::new(),
            next_id: 0,
            duration_seconds,
        }
    }

    /// Track duration used to clamp cue times.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Update the duration, e.g. once the decoded buffer is committed.
    ///
    /// Existing cues are left untouched; only future creations clamp against
    /// the new bound.
    pub fn set_duration(&mut self, duration_seconds: f64) {
        self.duration_seconds = duration_seconds;
    }

    /// Create a cue at `time_seconds`, clamped to `[0, duration]`.
    ///
    /// A store with no known duration (0) clamps only the lower bound.
    /// Without a name the cue is labeled "Cue N" by its 1-based position.
    pub fn create(&mut self, time_seconds: f64, name: Option<&str>) -> &HotCue {
        let clamped = if self.duration_seconds > 0.0 {
            time_seconds.clamp(0.0, self.duration_seconds)
        } else {
            time_seconds.max(0.0)
        };

        let name = match name {
            Some(n) => n.to_string(),
            None => format!("Cue {}", self.cues.len() + 1),
        };

        let id = self.next_id;
        self.next_id += 1;

        log::debug!("Created hot cue {} ({:?}) at {:.3}s", id, name, clamped);

        self.cues.push(HotCue {
            id,
            time_seconds: clamped,
            name,
        });
        self.cues.last().expect("cue was just pushed")
    }

    /// Remove the cue with the given id. Returns false if it was not found.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.cues.len();
        self.cues.retain(|cue| cue.id != id);
        before != self.cues.len()
    }

    /// Look up a cue for seek/jump actions.
    pub fn find_by_id(&self, id: u64) -> Option<&HotCue> {
        self.cues.iter().find(|cue| cue.id == id)
    }

    /// Remove every cue, used on new-track load and explicit clear requests.
    pub fn clear(&mut self) {
        self.cues.clear();
    }

    /// All cues in creation order, for rendering and export.
    pub fn list(&self) -> &[HotCue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_create_and_find() {
        let mut store = HotCueStore::new(300.0);
        let id = store.create(12.5, Some("Intro")).id;

        let cue = store.find_by_id(id).unwrap();
        assert_relative_eq!(cue.time_seconds, 12.5);
        assert_eq!(cue.name, "Intro");
    }

    #[test]
    fn test_default_names_count_up() {
        let mut store = HotCueStore::new(300.0);
        store.create(1.0, None);
        store.create(2.0, None);
        assert_eq!(store.list()[0].name, "Cue 1");
        assert_eq!(store.list()[1].name, "Cue 2");
    }

    #[test]
    fn test_delete_then_find_returns_none() {
        let mut store = HotCueStore::new(300.0);
        let id = store.create(5.0, None).id;
        assert!(store.delete(id));
        assert!(store.find_by_id(id).is_none());
        assert!(!store.delete(id));
    }

    #[test]
    fn test_ids_unique_across_deletes() {
        let mut store = HotCueStore::new(300.0);
        let first = store.create(1.0, None).id;
        store.delete(first);
        let second = store.create(2.0, None).id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_creation_order_preserved() {
        let mut store = HotCueStore::new(300.0);
        store.create(200.0, Some("late"));
        store.create(10.0, Some("early"));
        let names: Vec<&str> = store.list().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["late", "early"]);
    }

    #[test]
    fn test_out_of_range_times_are_clamped() {
        let mut store = HotCueStore::new(180.0);
        let low = store.create(-5.0, Some("x")).id;
        let high = store.create(500.0, Some("y")).id;
        assert_relative_eq!(store.find_by_id(low).unwrap().time_seconds, 0.0);
        assert_relative_eq!(store.find_by_id(high).unwrap().time_seconds, 180.0);
    }

    #[test]
    fn test_unknown_duration_clamps_lower_bound_only() {
        let mut store = HotCueStore::new(0.0);
        let id = store.create(42.0, None).id;
        assert_relative_eq!(store.find_by_id(id).unwrap().time_seconds, 42.0);
        let neg = store.create(-1.0, None).id;
        assert_relative_eq!(store.find_by_id(neg).unwrap().time_seconds, 0.0);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = HotCueStore::new(60.0);
        store.create(1.0, None);
        store.create(2.0, None);
        store.clear();
        assert!(store.is_empty());
    }
}
