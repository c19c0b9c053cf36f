//! Blob decoding via symphonia
//!
//! Takes the raw encoded bytes of a downloaded track and produces a
//! [`SampleBuffer`]. The container format is probed from the content; all
//! packets of the first decodable track are decoded and de-interleaved into
//! per-channel sample vectors.

use super::SampleBuffer;
use std::io::Cursor;
use symphonia::core::audio::SampleBuffer as SymphoniaBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use thiserror::Error;

/// Failure to turn an audio blob into a sample buffer.
///
/// All variants are local to a single load; the session survives and the
/// user can retry with another track.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported or malformed audio: {0}")]
    Malformed(symphonia::core::errors::Error),

    #[error("no decodable audio track in input")]
    NoAudioTrack,

    #[error("audio track is missing a sample rate")]
    MissingSampleRate,

    #[error("decoded stream contained no samples")]
    EmptyStream,
}

/// Decode an encoded audio blob into PCM samples.
///
/// Per-packet decode errors are logged and skipped so a damaged frame in an
/// otherwise valid file does not fail the whole load.
pub fn decode_blob(bytes: &[u8]) -> Result<SampleBuffer, DecodeError> {
    log::debug!("Decoding audio blob ({} bytes)", bytes.len());

    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes.to_vec())), Default::default());

    let hint = Hint::new();
    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(DecodeError::Malformed)?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(DecodeError::NoAudioTrack)?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(DecodeError::MissingSampleRate)?;

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .map_err(DecodeError::Malformed)?;

    let mut channels: Vec<Vec<f32>> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                log::warn!("Error reading packet: {:?}", e);
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("Error decoding packet: {:?}", e);
                continue;
            }
        };

        let spec = *decoded.spec();
        let duration = decoded.capacity() as u64;

        let mut sample_buf = SymphoniaBuffer::<f32>::new(duration, spec);
        sample_buf.copy_interleaved_ref(decoded);

        let samples = sample_buf.samples();
        let channel_count = spec.channels.count();
        if channel_count == 0 {
            continue;
        }

        if channels.len() < channel_count {
            channels.resize_with(channel_count, Vec::new);
        }

        // De-interleave frames into per-channel vectors
        for frame in samples.chunks_exact(channel_count) {
            for (ch, &sample) in frame.iter().enumerate() {
                channels[ch].push(sample);
            }
        }
    }

    if channels.is_empty() || channels[0].is_empty() {
        return Err(DecodeError::EmptyStream);
    }

    let buffer = SampleBuffer::from_channels(sample_rate, channels);
    log::debug!(
        "Decoded {} samples ({:.1}s) at {}Hz, {} channel(s)",
        buffer.sample_count(),
        buffer.duration_seconds(),
        buffer.sample_rate(),
        buffer.channel_count()
    );

    Ok(buffer)
}
