//! Rendering primitives for the waveform strip
//!
//! Everything here is pure data-in, data-out: the caller supplies the target
//! (width, height) each redraw and paints the returned geometry with whatever
//! presentation layer it uses. No drawing backend is referenced.

mod beatgrid;
mod waveform;

pub use beatgrid::{beat_grid, BeatMarker};
pub use waveform::{envelope, WaveformColumn, GRADIENT_STOPS};

/// Map a playback position to a horizontal percentage of the strip.
///
/// Idempotent: re-applying the same timestamp yields the same position.
/// Returns 0 for a non-positive duration.
pub fn position_percent(current_seconds: f64, duration_seconds: f64) -> f64 {
    if duration_seconds <= 0.0 {
        return 0.0;
    }
    current_seconds / duration_seconds * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_percent() {
        assert_relative_eq!(position_percent(30.0, 120.0), 25.0);
        assert_relative_eq!(position_percent(0.0, 120.0), 0.0);
        assert_relative_eq!(position_percent(120.0, 120.0), 100.0);
    }

    #[test]
    fn test_position_percent_zero_duration() {
        assert_relative_eq!(position_percent(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_position_percent_idempotent() {
        let a = position_percent(42.7, 300.0);
        let b = position_percent(42.7, 300.0);
        assert_relative_eq!(a, b);
    }
}
