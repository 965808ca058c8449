//! Plays a one-octave scale through the default audio device, driving the
//! preview engine with a simulated moving cursor.
//!
//! Usage:
//!   cargo run --example preview_scale

use std::thread;
use std::time::Duration;

use tc_audio::{CpalOutput, ToneOutput};
use tc_preview::{NotePreview, NoteSequence, ScheduledNote};

fn main() {
    let (mut output, consumer) = CpalOutput::new().unwrap_or_else(|e| {
        eprintln!("Failed to initialize audio: {}", e);
        std::process::exit(1);
    });

    output.build_stream(consumer).unwrap_or_else(|e| {
        eprintln!("Failed to start audio stream: {}", e);
        std::process::exit(1);
    });

    // C major scale, one note every 1.2s (the post-onset cooldown is 1s)
    let steps = [0, 2, 4, 5, 7, 9, 11, 12];
    let notes: NoteSequence = steps
        .iter()
        .enumerate()
        .map(|(i, &pitch)| ScheduledNote::new(pitch, 1.0 + i as f64 * 1.2, 0.8))
        .collect();

    let (mut preview, tones) = NotePreview::new();

    println!("Previewing {} notes...", notes.len());

    // Simulated cursor: report the position every 100ms
    let total = 1.0 + steps.len() as f64 * 1.2 + 1.0;
    let mut position = 0.0;
    while position < total {
        preview.tick(position, notes.clone());

        while let Ok(tone) = tones.try_recv() {
            println!(
                "onset near {:>4.1}s: {} samples ({:.2}s tone)",
                position,
                tone.sample_count(),
                tone.duration_secs()
            );
            if let Err(e) = output.play(&tone.wav) {
                eprintln!("Playback error: {}", e);
            }
        }

        thread::sleep(Duration::from_millis(100));
        position += 0.1;
    }

    preview.stop();
    println!("Done.");
}
