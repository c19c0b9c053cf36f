//! Cue export to DJ software interchange formats

mod rekordbox;

pub use rekordbox::{export_document, suggested_filename, ExportError};
