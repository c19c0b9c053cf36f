//! Energy-ratio drop detection
//!
//! A drop is treated as a point where mean amplitude jumps sharply. Fixed
//! candidate bar offsets typical for dnb arrangements are tested by comparing
//! the mean |amplitude| of a 2-beat window before and after each candidate.

use crate::audio::SampleBuffer;

/// Bar offsets at which dnb drops commonly land
const CANDIDATE_DROP_BARS: [u32; 6] = [16, 32, 48, 64, 96, 128];

/// Energy must at least grow by this factor across the candidate point
const DROP_ENERGY_RATIO: f64 = 1.5;

/// Fallback drop positions (in bars) when no candidate triggers
const FALLBACK_DROP_BARS: [u32; 2] = [32, 96];

const BEATS_PER_BAR: u32 = 4;

/// Scan the buffer for drop positions, in seconds.
///
/// Deterministic for a given (buffer, bpm). When the energy test never fires
/// the fixed fallback bars are used, each only if inside the track.
pub fn detect_drops(buffer: &SampleBuffer, bpm: u32) -> Vec<f64> {
    let samples = buffer.primary();
    let sample_rate = buffer.sample_rate();

    let seconds_per_beat = 60.0 / bpm as f64;
    let samples_per_beat = seconds_per_beat * sample_rate as f64;
    // 2-beat comparison window
    let window = (samples_per_beat * 2.0) as usize;

    let mut drops = Vec::new();

    for &bar in &CANDIDATE_DROP_BARS {
        let beat_position = (bar * BEATS_PER_BAR) as f64;
        let sample_position = (beat_position * samples_per_beat).floor() as usize;

        if sample_position >= samples.len() {
            continue;
        }

        let before = mean_abs(samples, sample_position.saturating_sub(window), window);
        let after = mean_abs(samples, sample_position, window);

        let ratio = after / before;
        if ratio > DROP_ENERGY_RATIO {
            let time = sample_position as f64 / sample_rate as f64;
            log::debug!(
                "Drop candidate at bar {} ({:.1}s): energy ratio {:.2}",
                bar,
                time,
                ratio
            );
            drops.push(time);
        }
    }

    if drops.is_empty() {
        let duration = buffer.duration_seconds();
        for &bar in &FALLBACK_DROP_BARS {
            let time = (bar * BEATS_PER_BAR) as f64 * seconds_per_beat;
            if time < duration {
                drops.push(time);
            }
        }
        if !drops.is_empty() {
            log::debug!("No energy-ratio drops; using fallback bars {:?}", FALLBACK_DROP_BARS);
        }
    }

    drops
}

/// Mean |amplitude| over `window` samples starting at `start`.
///
/// The sum is clamped to the buffer end but still divided by the nominal
/// window size, so a window hanging off the end reads as lower energy.
fn mean_abs(samples: &[f32], start: usize, window: usize) -> f64 {
    if window == 0 {
        return 0.0;
    }
    let end = (start + window).min(samples.len());
    let mut sum = 0.0f64;
    for &sample in &samples[start.min(samples.len())..end] {
        sum += sample.abs() as f64;
    }
    sum / window as f64
}
