use keysmith::generate_key_with;
use keysmith::rng::{Csprng, EntropySource, OsEntropy};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_keygen(c: &mut Criterion) {
    c.bench_function("generate_key seeded csprng", |b| {
        let mut rng = Csprng::from_seed([0x42u8; 32]);
        b.iter(|| generate_key_with(black_box(&mut rng)).unwrap())
    });

    c.bench_function("generate_key os entropy", |b| {
        b.iter(|| generate_key_with(black_box(OsEntropy)).unwrap())
    });

    c.bench_function("os entropy 64 bytes", |b| {
        let mut buf = [0u8; 64];
        b.iter(|| OsEntropy.fill(black_box(&mut buf)).unwrap())
    });
}

criterion_group!(benches, bench_keygen);
criterion_main!(benches);
