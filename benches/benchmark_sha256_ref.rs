//! Ginga-Hash-256 next to `sha2::Sha256` on the same 64-byte input.

use ginga::hash::ginga_hash;

use criterion::{Criterion, criterion_group, criterion_main};
use sha2::{Digest, Sha256};
use std::hint::black_box;

pub fn bench_digest_baseline(c: &mut Criterion) {
    let data = [0x5au8; 64];
    let mut group = c.benchmark_group("64-byte digest");

    group.bench_function("ginga_hash", |b| b.iter(|| ginga_hash(black_box(&data))));

    group.bench_function("sha2::Sha256", |b| {
        b.iter(|| Sha256::digest(black_box(&data)))
    });

    group.finish();
}

criterion_group!(benches, bench_digest_baseline);
criterion_main!(benches);
