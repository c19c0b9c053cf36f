//! Data model for a single editing session
//!
//! Defines track metadata as supplied by the external download service and
//! the ordered hot cue collection the rest of the engine works against.

mod cue;
mod track;

pub use cue::{HotCue, HotCueStore};
pub use track::{format_mmss, TrackMetadata};
