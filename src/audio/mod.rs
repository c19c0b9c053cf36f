//! Audio sample handling
//!
//! Decodes an in-memory audio blob into a [`SampleBuffer`] of per-channel
//! PCM samples. Decoding is delegated to symphonia; this module only
//! orchestrates "blob in, buffer out".

mod buffer;
mod decode;

pub use buffer::SampleBuffer;
pub use decode::{decode_blob, DecodeError};
