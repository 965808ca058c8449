//! Monophonic preview tone synthesis.
//!
//! Renders a short beep for one note: 8 kHz, 8-bit unsigned mono, three
//! harmonics blended by a per-pitch timbre factor. Cheap to create and small,
//! which is what a preview that re-renders on every note change needs.

use alloc::vec::Vec;
use core::f64::consts::PI;

use tc_notes::PitchTable;

use crate::wav;

/// Fixed output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 8000;

/// Fixed output resolution.
pub const BITS_PER_SAMPLE: u16 = 8;

const CHANNELS: u16 = 1;

/// Pitch classes sound in the octave starting at this pitch-table index.
const OCTAVE_OFFSET: i32 = 12;

/// A rendered tone: WAV header plus raw 8-bit unsigned PCM samples.
///
/// The consumer owns the bytes; the worker's double buffer keeps its own
/// storage and hands out copies at emission time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedTone {
    pub wav: Vec<u8>,
}

impl RenderedTone {
    /// The raw PCM samples, without the container header.
    pub fn samples(&self) -> &[u8] {
        &self.wav[wav::HEADER_LEN.min(self.wav.len())..]
    }

    /// Number of PCM samples in the tone.
    pub fn sample_count(&self) -> usize {
        self.samples().len()
    }

    /// Audible length of the tone in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.sample_count() as f64 / SAMPLE_RATE as f64
    }
}

/// Render one note's tone into a fresh buffer.
///
/// Deterministic: identical inputs produce byte-identical output.
pub fn render_tone(pitch_class: u8, duration_secs: f64, table: &impl PitchTable) -> Vec<u8> {
    let mut out = Vec::new();
    render_tone_into(&mut out, pitch_class, duration_secs, table);
    out
}

/// Render one note's tone, reusing `out`'s allocation.
///
/// A duration of zero or less produces a header-only buffer; emitting it is a
/// no-op at the consumer, not a fault.
pub fn render_tone_into(
    out: &mut Vec<u8>,
    pitch_class: u8,
    duration_secs: f64,
    table: &impl PitchTable,
) {
    let samples = if duration_secs > 0.0 {
        libm::round(duration_secs * SAMPLE_RATE as f64) as usize
    } else {
        0
    };

    out.clear();
    out.reserve(wav::HEADER_LEN + samples);
    wav::write_header(out, BITS_PER_SAMPLE, CHANNELS, SAMPLE_RATE, samples as u32);

    // Timbre factor: low pitch classes lean on the fundamental, high ones on
    // the fourth harmonic
    let d = (pitch_class as f64 + 1.0) / 13.0;
    let freq = table.frequency(pitch_class as i32 + OCTAVE_OFFSET);
    let step = 2.0 * PI * freq / SAMPLE_RATE as f64;

    let mut phase = 0.0f64;
    for _ in 0..samples {
        let value = d * 0.2 * libm::sin(phase)
            + 0.2 * libm::sin(2.0 * phase)
            + (1.0 - d) * 0.2 * libm::sin(4.0 * phase);
        phase += step;
        out.push(encode_u8(value));
    }
}

/// Map a sample in [-1, 1] to unsigned 8-bit PCM, clamping defensively.
fn encode_u8(value: f64) -> u8 {
    libm::round((value + 1.0) * 0.5 * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_notes::EqualTemperament;

    #[test]
    fn output_length_is_header_plus_samples() {
        let scale = EqualTemperament::default();
        for pitch_class in 0..12u8 {
            let tone = render_tone(pitch_class, 0.5, &scale);
            assert_eq!(tone.len(), wav::HEADER_LEN + 4000);
        }
    }

    #[test]
    fn fractional_durations_round_to_nearest_sample() {
        let scale = EqualTemperament::default();
        // 0.00019s * 8000 = 1.52 samples, rounds to 2
        let tone = render_tone(0, 0.00019, &scale);
        assert_eq!(tone.len(), wav::HEADER_LEN + 2);
    }

    #[test]
    fn rendering_is_deterministic() {
        let scale = EqualTemperament::default();
        let a = render_tone(7, 0.25, &scale);
        let b = render_tone(7, 0.25, &scale);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_pitch_classes_produce_distinct_tones() {
        let scale = EqualTemperament::default();
        let a = render_tone(0, 0.25, &scale);
        let b = render_tone(5, 0.25, &scale);
        assert_ne!(a, b);
    }

    #[test]
    fn zero_duration_gives_header_only() {
        let scale = EqualTemperament::default();
        let tone = render_tone(3, 0.0, &scale);
        assert_eq!(tone.len(), wav::HEADER_LEN);
    }

    #[test]
    fn negative_duration_gives_header_only() {
        let scale = EqualTemperament::default();
        let tone = render_tone(3, -1.0, &scale);
        assert_eq!(tone.len(), wav::HEADER_LEN);
    }

    #[test]
    fn first_sample_is_midpoint() {
        // phase starts at 0, so the first sample is sin(0) terms = 0.0,
        // which encodes to round(0.5 * 255) = 128
        let scale = EqualTemperament::default();
        let tone = render_tone(0, 0.1, &scale);
        assert_eq!(tone[wav::HEADER_LEN], 128);
    }

    #[test]
    fn samples_stay_inside_the_weighted_range() {
        // The harmonic weights sum to 0.4 in magnitude, so encoded bytes
        // stay inside [76, 179]
        let scale = EqualTemperament::default();
        for pitch_class in 0..12u8 {
            let tone = render_tone(pitch_class, 0.3, &scale);
            for &b in &tone[wav::HEADER_LEN..] {
                assert!((76u8..=179).contains(&b), "sample {} out of range", b);
            }
        }
    }

    #[test]
    fn render_into_reuses_and_replaces_content() {
        let scale = EqualTemperament::default();
        let mut buf = Vec::new();

        render_tone_into(&mut buf, 0, 0.5, &scale);
        let first = buf.clone();

        render_tone_into(&mut buf, 1, 0.5, &scale);
        assert_eq!(buf.len(), first.len());
        assert_ne!(buf, first);

        render_tone_into(&mut buf, 0, 0.5, &scale);
        assert_eq!(buf, first);
    }

    #[test]
    fn header_sample_count_matches_payload() {
        let scale = EqualTemperament::default();
        let tone = RenderedTone {
            wav: render_tone(9, 0.5, &scale),
        };
        assert_eq!(tone.sample_count(), 4000);
        assert!((tone.duration_secs() - 0.5).abs() < 1e-9);

        let data_size = u32::from_le_bytes([tone.wav[40], tone.wav[41], tone.wav[42], tone.wav[43]]);
        assert_eq!(data_size as usize, tone.sample_count());
    }
}
