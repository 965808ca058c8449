//! Cursor-following note preview engine.
//!
//! A foreground component reports the playback position and the active note
//! list via [`NotePreview::tick`]; a background worker renders the next
//! note's tone ahead of its onset and emits the finished WAV buffer on a
//! channel at the onset moment.

mod preview;
mod worker;

// Re-export common types so callers don't need tc-notes/tc-synth directly.
pub use tc_notes::{EqualTemperament, NoteSequence, PitchTable, ScheduledNote};
pub use tc_synth::{RenderedTone, SAMPLE_RATE};

pub use preview::NotePreview;
