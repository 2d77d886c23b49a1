//! Benchmarks for ring element arithmetic.
#![cfg(feature = "benchmark")]
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use venum_core::ring::{PolyModulus, PolyRing};

// Configure Criterion:
// Define one group per operation, so we can compare their times.
criterion_group! {
    name = bench_ring_multiplication;
    config = Criterion::default().sample_size(50);
    targets = bench_schoolbook_mul
}

criterion_group! {
    name = bench_ring_addition;
    config = Criterion::default().sample_size(50);
    targets = bench_add
}

criterion_main!(bench_ring_multiplication, bench_ring_addition);

fn test_ring() -> PolyRing {
    // Dimension and modulus sized like the scheme's large-modulus golden
    // parameter set, to keep the benchmark representative of real usage.
    PolyRing::new(
        "1400472361734830353".parse().unwrap(),
        PolyModulus::new(1024),
    )
}

/// Run schoolbook cyclotomic multiplication as a Criterion benchmark.
fn bench_schoolbook_mul(settings: &mut Criterion) {
    let ring = test_ring();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let a = ring.sample_uniform(None, &mut rng);
    let b = ring.sample_uniform(None, &mut rng);

    settings.bench_with_input(
        BenchmarkId::new("Ring multiplication", "N=1024, random coefficients"),
        &(a, b),
        |benchmark, (a, b)| benchmark.iter(|| &a * &b),
    );
}

/// Run coefficient-wise ring addition as a Criterion benchmark.
fn bench_add(settings: &mut Criterion) {
    let ring = test_ring();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let a = ring.sample_uniform(None, &mut rng);
    let b = ring.sample_uniform(None, &mut rng);

    settings.bench_with_input(
        BenchmarkId::new("Ring addition", "N=1024, random coefficients"),
        &(a, b),
        |benchmark, (a, b)| benchmark.iter(|| &a + &b),
    );
}
