//! Next-note selection and delay computation.
//!
//! A schedule pass is a pure function of the current position, the note list,
//! and the onset of the last rendered note. The worker calls it after every
//! wake and turns the result into a timed wait.

use tc_notes::ScheduledNote;

/// Delay returned when no upcoming note exists: wait until the next update.
pub const INDEFINITE_DELAY: f64 = u32::MAX as f64 / 1000.0;

/// Floor for corrected delays, so the worker never busy-waits.
pub const MIN_DELAY: f64 = 0.001;

/// Outcome of a schedule pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NextTone {
    /// Seconds until the selected note's onset (INDEFINITE_DELAY when none)
    pub delay: f64,
    /// The note to sound next, if any
    pub note: Option<ScheduledNote>,
    /// True when the selected onset differs from the last rendered one
    pub needs_render: bool,
}

/// Select the first note at or after `position` and the delay until it.
///
/// Notes with an onset strictly before `position` are already past and are
/// skipped. The scan assumes `notes` is sorted ascending by onset.
pub fn find_next(position: f64, notes: &[ScheduledNote], last_onset: Option<f64>) -> NextTone {
    match notes.iter().find(|n| n.onset >= position) {
        Some(note) => NextTone {
            delay: note.onset - position,
            note: Some(*note),
            needs_render: last_onset != Some(note.onset),
        },
        None => NextTone {
            delay: INDEFINITE_DELAY,
            note: None,
            needs_render: false,
        },
    }
}
