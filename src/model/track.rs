use serde::{Deserialize, Serialize};

/// Metadata for the currently loaded track
///
/// Supplied by the external download/analysis service; read-only from the
/// engine's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Artist name
    pub artist: String,

    /// Track title
    pub title: String,

    /// Tempo in beats per minute, 0 when unknown
    pub bpm: u32,

    /// Musical key, "Unknown" when not detected
    pub key: String,

    /// Track duration in seconds
    pub duration_seconds: f64,
}

impl TrackMetadata {
    /// Create metadata with the "unknown" sentinels filled in.
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            bpm: 0,
            key: "Unknown".to_string(),
            duration_seconds: 0.0,
        }
    }

    /// Set the tempo.
    pub fn with_bpm(mut self, bpm: u32) -> Self {
        self.bpm = bpm;
        self
    }

    /// Set the musical key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the duration.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Duration formatted as M:SS for display and export.
    pub fn total_time_display(&self) -> String {
        format_mmss(self.duration_seconds)
    }
}

impl Default for TrackMetadata {
    fn default() -> Self {
        TrackMetadata::new("Unknown", "Unknown")
    }
}

/// Format a time in seconds as M:SS (minutes unpadded, seconds zero-padded).
pub fn format_mmss(seconds: f64) -> String {
    let total = seconds.max(0.0);
    let minutes = (total / 60.0).floor() as u64;
    let secs = (total % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0.0), "0:00");
        assert_eq!(format_mmss(59.9), "0:59");
        assert_eq!(format_mmss(60.0), "1:00");
        assert_eq!(format_mmss(185.4), "3:05");
        assert_eq!(format_mmss(600.0), "10:00");
    }

    #[test]
    fn test_metadata_defaults() {
        let meta = TrackMetadata::new("Artist", "Title");
        assert_eq!(meta.bpm, 0);
        assert_eq!(meta.key, "Unknown");
        assert_eq!(meta.total_time_display(), "0:00");
    }

    #[test]
    fn test_metadata_builders() {
        let meta = TrackMetadata::new("A", "T")
            .with_bpm(174)
            .with_key("F Minor")
            .with_duration(361.2);
        assert_eq!(meta.bpm, 174);
        assert_eq!(meta.key, "F Minor");
        assert_eq!(meta.total_time_display(), "6:01");
    }
}
