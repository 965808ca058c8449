//! Conversion from rendered tones to device-rate float samples.

use tc_synth::{wav, SAMPLE_RATE};

/// Strip the container header, returning the raw PCM payload.
pub fn pcm_payload(wav_bytes: &[u8]) -> &[u8] {
    if wav_bytes.len() <= wav::HEADER_LEN {
        &[]
    } else {
        &wav_bytes[wav::HEADER_LEN..]
    }
}

/// Center an unsigned 8-bit sample around zero (WAV 8-bit is unsigned, center=128).
fn sample_to_f32(byte: u8) -> f32 {
    (byte as f32 - 128.0) / 128.0
}

/// Linearly resample unsigned 8-bit mono PCM to f32 at the device rate.
pub fn resample_to_f32(pcm: &[u8], src_rate: u32, dst_rate: u32) -> Vec<f32> {
    if pcm.is_empty() || src_rate == 0 || dst_rate == 0 {
        return Vec::new();
    }
    if src_rate == dst_rate {
        return pcm.iter().map(|&b| sample_to_f32(b)).collect();
    }

    let duration = pcm.len() as f64 / src_rate as f64;
    let out_len = (duration * dst_rate as f64).round() as usize;
    let step = src_rate as f64 / dst_rate as f64;
    let last = pcm.len() - 1;

    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let pos = i as f64 * step;
        let idx = (pos as usize).min(last);
        let frac = (pos - idx as f64) as f32;
        let a = sample_to_f32(pcm[idx]);
        let b = sample_to_f32(pcm[(idx + 1).min(last)]);
        out.push(a + (b - a) * frac);
    }
    out
}

/// Convert a full rendered tone (header + payload) to device-rate samples.
pub fn tone_to_device(wav_bytes: &[u8], device_rate: u32) -> Vec<f32> {
    resample_to_f32(pcm_payload(wav_bytes), SAMPLE_RATE, device_rate)
}
