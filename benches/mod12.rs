//! Benchmark for pitch-class reduction on the quantizer hot path.
//!
//! Run with: cargo bench
//!
//! Compares the table-lookup `mod12` against the plain remainder operator
//! over the full byte domain.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use quantizer_module::math::mod12;

fn bench_mod12(c: &mut Criterion) {
    let mut group = c.benchmark_group("math/mod12");

    group.bench_function("table", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for v in 0..=255u8 {
                acc += mod12(black_box(v)) as u32;
            }
            acc
        })
    });

    group.bench_function("divide", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for v in 0..=255u8 {
                acc += (black_box(v) % 12) as u32;
            }
            acc
        })
    });

    group.finish();
}

criterion_group!(benches, bench_mod12);
criterion_main!(benches);
