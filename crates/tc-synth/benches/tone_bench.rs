//! Benchmarks for tone rendering.
//!
//! Run with: cargo bench
//!
//! A render must finish comfortably inside the gap between a position update
//! and the next onset; the worker subtracts render time from its sleep, so
//! slow rendering eats directly into scheduling headroom.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tc_notes::EqualTemperament;
use tc_synth::render_tone;

/// Typical preview note lengths in seconds.
const DURATIONS: &[f64] = &[0.1, 0.5, 2.0];

fn bench_render_tone(c: &mut Criterion) {
    let scale = EqualTemperament::default();
    let mut group = c.benchmark_group("synth/render_tone");

    for &duration in DURATIONS {
        group.bench_with_input(
            BenchmarkId::new("pitch_class_0", duration),
            &duration,
            |b, &d| b.iter(|| render_tone(black_box(0), black_box(d), &scale)),
        );

        group.bench_with_input(
            BenchmarkId::new("pitch_class_11", duration),
            &duration,
            |b, &d| b.iter(|| render_tone(black_box(11), black_box(d), &scale)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render_tone);
criterion_main!(benches);
