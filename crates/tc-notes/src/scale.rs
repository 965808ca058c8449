//! Pitch-index-to-frequency lookup.
//!
//! The renderer treats the scale as a pure function from pitch index to
//! frequency in Hz. The default implementation is 12-tone equal temperament
//! referenced at concert A.

/// Pitch index of concert A (440 Hz) in the preview numbering.
pub const CONCERT_A_INDEX: i32 = 33;

/// Frequency of concert A in Hz.
pub const CONCERT_A_HZ: f64 = 440.0;

/// A fixed lookup from pitch index to frequency in Hz.
pub trait PitchTable {
    fn frequency(&self, index: i32) -> f64;
}

/// 12-tone equal temperament around a reference pitch.
#[derive(Clone, Copy, Debug)]
pub struct EqualTemperament {
    reference_hz: f64,
    reference_index: i32,
}

impl EqualTemperament {
    /// Create a temperament with a custom reference (e.g. A = 442 Hz).
    pub const fn new(reference_hz: f64, reference_index: i32) -> Self {
        Self {
            reference_hz,
            reference_index,
        }
    }
}

impl Default for EqualTemperament {
    fn default() -> Self {
        Self::new(CONCERT_A_HZ, CONCERT_A_INDEX)
    }
}

impl PitchTable for EqualTemperament {
    /// freq = reference * 2^((index - reference_index) / 12)
    fn frequency(&self, index: i32) -> f64 {
        self.reference_hz * libm::exp2((index - self.reference_index) as f64 / 12.0)
    }
}
