//! Audio output backend for the tonecue preview engine.
//!
//! Consumes the rendered WAV buffers the preview worker emits and plays them
//! through the default OS audio device.

mod convert;
mod cpal_backend;
mod traits;

pub use convert::{pcm_payload, resample_to_f32, tone_to_device};
pub use cpal_backend::CpalOutput;
pub use traits::{AudioError, ToneOutput};
