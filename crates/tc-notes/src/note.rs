//! Notes projected onto the playback timeline.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// An ordered list of notes, sorted ascending by onset.
///
/// The scheduler scans forward and relies on caller ordering; it never sorts.
pub type NoteSequence = Vec<ScheduledNote>;

/// A note captured for a render pass.
///
/// Times are in seconds, the same unit as position updates. Immutable once
/// captured; the worker copies the note it selects out of the shared list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScheduledNote {
    /// Octave-absolute pitch index (the renderer folds it to a pitch class)
    pub pitch: i32,
    /// When the note should begin sounding, in seconds
    pub onset: f64,
    /// How long the note sounds, in seconds
    pub duration: f64,
}

impl ScheduledNote {
    /// Create a note at an onset with a duration.
    pub const fn new(pitch: i32, onset: f64, duration: f64) -> Self {
        Self {
            pitch,
            onset,
            duration,
        }
    }

    /// Pitch folded into the 12-tone octave (0-11).
    pub fn pitch_class(&self) -> u8 {
        self.pitch.rem_euclid(12) as u8
    }

    /// Total order by onset, for keeping sequences sorted.
    pub fn onset_cmp(&self, other: &Self) -> Ordering {
        self.onset.total_cmp(&other.onset)
    }
}
