//! cuedeck - waveform and hot cue engine with rekordbox export
//!
//! This library decodes a downloaded audio blob into PCM samples, derives
//! waveform and beat-grid geometry for a scrubbing strip, manages a session's
//! hot cue markers (manual and genre-informed automatic placement), and
//! serializes the cues to rekordbox-compatible XML.

pub mod audio;
pub mod autocue;
pub mod export;
pub mod model;
pub mod notify;
pub mod prefs;
pub mod render;
pub mod session;

pub use autocue::{auto_set_hot_cues, AutoCueConfig};
pub use model::{HotCue, HotCueStore, TrackMetadata};
pub use session::Session;
