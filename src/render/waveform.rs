//! Min/max waveform envelope
//!
//! Partitions the first channel into one window per output pixel column and
//! keeps the amplitude extremes of each window. The caller turns columns into
//! vertical bars centered on the strip's midline.

use crate::audio::SampleBuffer;

/// Vertical gradient stops for the waveform fill, as (offset, rgba).
///
/// Presentation hint only; the envelope itself is the min/max data.
pub const GRADIENT_STOPS: [(f32, &str); 3] = [
    (0.0, "rgba(52, 152, 219, 0.8)"),
    (0.5, "rgba(52, 152, 219, 0.5)"),
    (1.0, "rgba(52, 152, 219, 0.8)"),
];

/// Amplitude extremes of one pixel column's sample window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformColumn {
    /// Smallest sample in the window (0 for an empty window)
    pub min: f32,
    /// Largest sample in the window (0 for an empty window)
    pub max: f32,
}

impl WaveformColumn {
    const EMPTY: WaveformColumn = WaveformColumn { min: 0.0, max: 0.0 };

    /// Peak deviation from the midline.
    pub fn amplitude(&self) -> f32 {
        self.min.abs().max(self.max.abs())
    }

    /// Height in pixels of the bar for a strip of the given height.
    pub fn bar_height(&self, height: f32) -> f32 {
        height * self.amplitude()
    }

    /// Top edge in pixels of the bar, centered on the midline.
    pub fn bar_top(&self, height: f32) -> f32 {
        height / 2.0 * (1.0 - self.amplitude())
    }
}

/// Compute the per-column min/max envelope of the buffer's first channel.
///
/// Always returns exactly `width` columns. Window length is
/// `ceil(sample_count / width)`; windows that start past the end of the
/// sample data are empty and come back as zero columns rather than reading
/// out of bounds. Pure function of (samples, width).
pub fn envelope(buffer: &SampleBuffer, width: u32) -> Vec<WaveformColumn> {
    let samples = buffer.primary();
    let width = width as usize;

    if width == 0 {
        return Vec::new();
    }
    if samples.is_empty() {
        return vec![WaveformColumn::EMPTY; width];
    }

    let step = samples.len().div_ceil(width);
    let mut columns = Vec::with_capacity(width);

    for i in 0..width {
        let start = i * step;
        if start >= samples.len() {
            columns.push(WaveformColumn::EMPTY);
            continue;
        }
        let end = ((i + 1) * step).min(samples.len());

        let mut min = samples[start];
        let mut max = samples[start];
        for &sample in &samples[start..end] {
            if sample < min {
                min = sample;
            }
            if sample > max {
                max = sample;
            }
        }

        columns.push(WaveformColumn { min, max });
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn buffer_with(samples: Vec<f32>) -> SampleBuffer {
        SampleBuffer::from_mono(44100, samples)
    }

    #[test]
    fn test_exact_column_count() {
        let buffer = buffer_with((0..1000).map(|i| (i as f32 / 1000.0).sin()).collect());
        for width in [1u32, 7, 100, 640] {
            assert_eq!(envelope(&buffer, width).len(), width as usize);
        }
    }

    #[test]
    fn test_fewer_samples_than_columns() {
        // 3 samples, 8 columns: trailing windows are empty, no panic
        let buffer = buffer_with(vec![0.25, -0.5, 0.75]);
        let columns = envelope(&buffer, 8);
        assert_eq!(columns.len(), 8);
        assert_relative_eq!(columns[0].amplitude(), 0.25);
        assert_relative_eq!(columns[1].amplitude(), 0.5);
        assert_relative_eq!(columns[2].amplitude(), 0.75);
        for column in &columns[3..] {
            assert_relative_eq!(column.amplitude(), 0.0);
        }
    }

    #[test]
    fn test_window_extremes() {
        // One column swallowing everything keeps the global min/max
        let buffer = buffer_with(vec![0.1, -0.9, 0.4, 0.8, -0.2]);
        let columns = envelope(&buffer, 1);
        assert_relative_eq!(columns[0].min, -0.9);
        assert_relative_eq!(columns[0].max, 0.8);
        assert_relative_eq!(columns[0].amplitude(), 0.9);
    }

    #[test]
    fn test_bar_geometry() {
        let column = WaveformColumn { min: -0.5, max: 0.25 };
        assert_relative_eq!(column.bar_height(100.0), 50.0);
        assert_relative_eq!(column.bar_top(100.0), 25.0);
    }

    #[test]
    fn test_deterministic() {
        let buffer = buffer_with((0..4096).map(|i| ((i * 37) % 100) as f32 / 100.0 - 0.5).collect());
        assert_eq!(envelope(&buffer, 200), envelope(&buffer, 200));
    }

    #[test]
    fn test_empty_buffer_and_zero_width() {
        let empty = buffer_with(Vec::new());
        let columns = envelope(&empty, 4);
        assert_eq!(columns.len(), 4);
        assert!(columns.iter().all(|c| c.amplitude() == 0.0));

        let buffer = buffer_with(vec![0.5]);
        assert!(envelope(&buffer, 0).is_empty());
    }
}
