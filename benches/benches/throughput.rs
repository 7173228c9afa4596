//! Ascon-CXOF Criterion Benchmark
//!
//! Statistically rigorous measurements of the permutation, the absorb phase
//! (message length sweep) and the squeeze phase (output length sweep).

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascon_cxof::permutation::AsconState;
use ascon_cxof::{xof_with_rounds, Rounds};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;

// =============================================================================
// BENCHMARK 1: RAW PERMUTATION
// =============================================================================

/// Latency of a single permutation call for each round count.
fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Permutation");

    for (rounds, name) in [
        (Rounds::P6, "P6"),
        (Rounds::P8, "P8"),
        (Rounds::P12, "P12"),
    ] {
        group.bench_function(name, |b| {
            let mut state = AsconState::new(rand::rng().random());
            b.iter(|| {
                state.permute(black_box(rounds));
                black_box(state.rate())
            });
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: ABSORB THROUGHPUT
// =============================================================================

/// Message-length sweep with a fixed 32-byte output.
fn bench_absorb(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Absorb");

    let sizes = [
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
        (16 * KB, "16KB"),
        (256 * KB, "256KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| xof_with_rounds(black_box(data), b"", 32, Rounds::P12)),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: SQUEEZE THROUGHPUT
// =============================================================================

/// Output-length sweep with a fixed short message.
fn bench_squeeze(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Squeeze");

    let sizes = [
        (32, "32B"),
        (256, "256B"),
        (KB, "1KB"),
        (16 * KB, "16KB"),
    ];

    for (size, name) in sizes {
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(criterion::BenchmarkId::from_parameter(name), |b| {
            b.iter(|| xof_with_rounds(black_box(b"seed"), b"stream", size, Rounds::P12))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: ROUND VARIANTS
// =============================================================================

/// Same workload across the three round counts.
fn bench_round_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Round-Variants");

    let mut input = vec![0u8; 4 * KB];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(input.len() as u64));

    for (rounds, name) in [
        (Rounds::P6, "P6"),
        (Rounds::P8, "P8"),
        (Rounds::P12, "P12"),
    ] {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| xof_with_rounds(black_box(data), b"", 32, rounds)),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_permutation,
    bench_absorb,
    bench_squeeze,
    bench_round_variants
);
criterion_main!(benches);
