//! Tone synthesis and onset scheduling for the tonecue preview engine.
//!
//! Pure processing only: rendering a note into a WAV byte buffer and picking
//! the next note to sound. The threaded worker that drives both lives in
//! tc-preview.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod schedule;
mod tone;
pub mod wav;

pub use schedule::{find_next, NextTone, INDEFINITE_DELAY, MIN_DELAY};
pub use tone::{render_tone, render_tone_into, RenderedTone, BITS_PER_SAMPLE, SAMPLE_RATE};
