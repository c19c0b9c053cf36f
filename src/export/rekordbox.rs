//! Rekordbox XML document writer
//!
//! Serializes the hot cue list plus track metadata into the DJ_PLAYLISTS
//! schema rekordbox 6 imports. One TRACK entry, one POSITION_MARK per cue in
//! creation order, cue times as integer milliseconds (truncated).

use crate::model::{HotCue, TrackMetadata};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Exporting zero cues would produce a degenerate file; refused instead
    #[error("no hot cues to export")]
    EmptyExport,

    #[error("failed to write XML: {0}")]
    Xml(String),
}

fn xml_err(e: impl std::fmt::Display) -> ExportError {
    ExportError::Xml(e.to_string())
}

/// Serialize metadata and cues into a rekordbox XML document.
///
/// Deterministic: identical inputs always produce byte-identical output, so
/// repeated exports of an unchanged session compare equal.
pub fn export_document(metadata: &TrackMetadata, cues: &[HotCue]) -> Result<String, ExportError> {
    if cues.is_empty() {
        return Err(ExportError::EmptyExport);
    }

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;

    let mut playlists = BytesStart::new("DJ_PLAYLISTS");
    playlists.push_attribute(("Version", "1.0.0"));
    writer.write_event(Event::Start(playlists)).map_err(xml_err)?;

    let mut product = BytesStart::new("PRODUCT");
    product.push_attribute(("Name", "rekordbox"));
    product.push_attribute(("Version", "6.0.0"));
    product.push_attribute(("Company", "Pioneer DJ"));
    writer.write_event(Event::Empty(product)).map_err(xml_err)?;

    let mut collection = BytesStart::new("COLLECTION");
    collection.push_attribute(("Entries", "1"));
    writer.write_event(Event::Start(collection)).map_err(xml_err)?;

    let mut track = BytesStart::new("TRACK");
    track.push_attribute(("Artist", metadata.artist.as_str()));
    track.push_attribute(("Title", metadata.title.as_str()));
    track.push_attribute(("Kind", "MP3 File"));
    track.push_attribute(("BPM", metadata.bpm.to_string().as_str()));
    track.push_attribute(("Key", metadata.key.as_str()));
    track.push_attribute(("TotalTime", metadata.total_time_display().as_str()));
    writer.write_event(Event::Start(track)).map_err(xml_err)?;

    for cue in cues {
        let start_ms = (cue.time_seconds * 1000.0).floor() as u64;
        let mut mark = BytesStart::new("POSITION_MARK");
        mark.push_attribute(("Name", cue.name.as_str()));
        mark.push_attribute(("Type", "0"));
        mark.push_attribute(("Start", start_ms.to_string().as_str()));
        mark.push_attribute(("Num", "0"));
        writer.write_event(Event::Empty(mark)).map_err(xml_err)?;
    }

    writer.write_event(Event::End(BytesEnd::new("TRACK"))).map_err(xml_err)?;
    writer.write_event(Event::End(BytesEnd::new("COLLECTION"))).map_err(xml_err)?;
    writer.write_event(Event::End(BytesEnd::new("DJ_PLAYLISTS"))).map_err(xml_err)?;

    let bytes = writer.into_inner();
    let document = String::from_utf8(bytes).expect("writer produced valid UTF-8");

    log::info!("Exported {} cue(s) for {} - {}", cues.len(), metadata.artist, metadata.title);
    Ok(document)
}

/// Filename offered to the user for the exported document.
pub fn suggested_filename(metadata: &TrackMetadata) -> String {
    format!("{} - {} - Hot Cues.xml", metadata.artist, metadata.title)
}
