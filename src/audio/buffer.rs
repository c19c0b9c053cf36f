/// Decoded PCM audio for one track
///
/// Immutable once built; a new track load replaces the whole buffer.
/// Amplitudes are in [-1, 1]. Renderers and the auto-cue heuristic only
/// consume the first channel.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl SampleBuffer {
    /// Build a buffer from raw per-channel samples.
    ///
    /// Used by the decoder and by tests that need synthetic audio.
    pub fn from_channels(sample_rate: u32, channels: Vec<Vec<f32>>) -> Self {
        debug_assert!(sample_rate > 0, "sample rate must be positive");
        Self {
            sample_rate,
            channels,
        }
    }

    /// Convenience constructor for mono audio.
    pub fn from_mono(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self::from_channels(sample_rate, vec![samples])
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples of the first channel. Empty slice if the buffer has no channels.
    pub fn primary(&self) -> &[f32] {
        self.channels.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of samples in the first channel.
    pub fn sample_count(&self) -> usize {
        self.primary().len()
    }

    /// Track duration derived from the first channel's length.
    pub fn duration_seconds(&self) -> f64 {
        self.sample_count() as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_duration_from_sample_count() {
        let buffer = SampleBuffer::from_mono(44100, vec![0.0; 44100 * 3]);
        assert_relative_eq!(buffer.duration_seconds(), 3.0);
        assert_eq!(buffer.sample_count(), 44100 * 3);
    }

    #[test]
    fn test_primary_channel_of_stereo() {
        let buffer = SampleBuffer::from_channels(8000, vec![vec![0.5, -0.5], vec![0.1, 0.1]]);
        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.primary(), &[0.5, -0.5]);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = SampleBuffer::from_channels(44100, Vec::new());
        assert_eq!(buffer.sample_count(), 0);
        assert_relative_eq!(buffer.duration_seconds(), 0.0);
    }
}
