//! Cross-Algorithm Comparison Benchmark
//!
//! 32-byte digests versus established cryptographic hashes. Ascon targets
//! lightweight environments, so losing to wide-pipe SIMD designs on bulk
//! throughput is expected; the interesting numbers are the short-input ones.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use sha2::{Digest, Sha256};
use std::hint::black_box;

const KB: usize = 1024;

fn bench_compare(c: &mut Criterion) {
    let sizes = [
        (32, "32B"),
        (256, "256B"),
        (KB, "1KB"),
        (16 * KB, "16KB"),
        (256 * KB, "256KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);

        let mut group = c.benchmark_group(format!("Compare-{name}"));
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input("ascon-cxof", &input, |b, data| {
            b.iter(|| ascon_cxof::hash(black_box(data)))
        });

        group.bench_with_input("sha256", &input, |b, data| {
            b.iter(|| {
                let mut hasher = Sha256::new();
                hasher.update(black_box(data));
                hasher.finalize()
            })
        });

        group.bench_with_input("blake3", &input, |b, data| {
            b.iter(|| blake3::hash(black_box(data)))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
