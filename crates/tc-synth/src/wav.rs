//! WAV container header writing.

use alloc::vec::Vec;

/// Length of the PCM WAV header in bytes.
pub const HEADER_LEN: usize = 44;

/// Append a 44-byte PCM WAV header to `out`.
///
/// All fields are little-endian. `sample_count` counts frames, so the data
/// size is `sample_count * channels * bits / 8`.
pub fn write_header(
    out: &mut Vec<u8>,
    bits: u16,
    channels: u16,
    sample_rate: u32,
    sample_count: u32,
) {
    let bytes_per_frame = (channels * bits / 8) as u32;
    let data_size = sample_count * bytes_per_frame;
    let total_size = data_size + HEADER_LEN as u32;

    // RIFF chunk
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(total_size - 8).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");

    // fmt chunk
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * bytes_per_frame).to_le_bytes()); // byte rate
    out.extend_from_slice(&(bytes_per_frame as u16).to_le_bytes()); // block align
    out.extend_from_slice(&bits.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
}

/// Build a standalone header.
pub fn header(bits: u16, channels: u16, sample_rate: u32, sample_count: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN);
    write_header(&mut out, bits, channels, sample_rate, sample_count);
    out
}
