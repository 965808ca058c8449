//! Note and pitch types for the tonecue preview engine.
//!
//! This crate defines the data the scheduler consumes: notes projected onto
//! the playback timeline, and the pitch-to-frequency lookup used by the tone
//! renderer.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod note;
mod scale;

pub use note::{NoteSequence, ScheduledNote};
pub use scale::{EqualTemperament, PitchTable, CONCERT_A_HZ, CONCERT_A_INDEX};
