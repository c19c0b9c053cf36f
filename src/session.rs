//! Editing session state
//!
//! One session owns the current track's metadata, decoded samples and hot
//! cues. There is no parallelism in the engine, but decoding suspends: if a
//! new track load starts while an older decode is still in flight, the older
//! result must be discarded rather than committed over the newer state. Each
//! load hands out a ticket carrying the load generation; committing a buffer
//! checks the ticket still matches.

use crate::audio::SampleBuffer;
use crate::model::{HotCueStore, TrackMetadata};

/// Single-track editing session
#[derive(Debug, Default)]
pub struct Session {
    metadata: TrackMetadata,
    buffer: Option<SampleBuffer>,
    cues: HotCueStore,
    generation: u64,
}

/// Proof of which load a pending decode belongs to
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading a new track.
    ///
    /// Invalidates any decode still in flight for the previous track, drops
    /// the old buffer and clears all cues.
    pub fn begin_load(&mut self, metadata: TrackMetadata) -> LoadTicket {
        self.generation += 1;
        self.buffer = None;
        self.cues = HotCueStore::new(metadata.duration_seconds);
        log::debug!(
            "Loading track {} - {} (generation {})",
            metadata.artist,
            metadata.title,
            self.generation
        );
        self.metadata = metadata;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Commit a decoded buffer for the load identified by `ticket`.
    ///
    /// Returns false (and leaves the session untouched) when another load
    /// started after the ticket was issued.
    pub fn commit_buffer(&mut self, ticket: LoadTicket, buffer: SampleBuffer) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale decode (ticket generation {}, current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        // The decoded length is authoritative over the metadata's estimate
        let duration = buffer.duration_seconds();
        self.metadata.duration_seconds = duration;
        self.cues.set_duration(duration);
        self.buffer = Some(buffer);
        true
    }

    pub fn metadata(&self) -> &TrackMetadata {
        &self.metadata
    }

    /// Decoded samples of the current track, if the load has completed.
    pub fn buffer(&self) -> Option<&SampleBuffer> {
        self.buffer.as_ref()
    }

    pub fn cues(&self) -> &HotCueStore {
        &self.cues
    }

    pub fn cues_mut(&mut self) -> &mut HotCueStore {
        &mut self.cues
    }

    pub fn duration_seconds(&self) -> f64 {
        self.metadata.duration_seconds
    }

    /// Run automatic cue placement against the committed buffer.
    ///
    /// No-op (empty result) before a buffer is committed or when the track's
    /// tempo is unknown.
    pub fn auto_cue(&mut self, config: &crate::autocue::AutoCueConfig) -> Vec<u64> {
        match &self.buffer {
            Some(buffer) => {
                crate::autocue::auto_set_hot_cues(buffer, self.metadata.bpm, &mut self.cues, config)
            }
            None => {
                log::debug!("Auto-cue requested with no buffer loaded");
                Vec::new()
            }
        }
    }

    /// Map a click position on the strip (0..=1) to a seek time.
    ///
    /// None until a buffer has been committed; there is nothing to seek in
    /// before that.
    pub fn seek_time(&self, fraction: f64) -> Option<f64> {
        self.buffer
            .as_ref()
            .map(|b| fraction.clamp(0.0, 1.0) * b.duration_seconds())
    }

    /// Playhead position as a percentage of the strip width.
    pub fn playhead_percent(&self, current_seconds: f64) -> f64 {
        crate::render::position_percent(current_seconds, self.duration_seconds())
    }
}
