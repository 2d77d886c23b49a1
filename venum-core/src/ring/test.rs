//! Tests for ring element arithmetic and cyclotomic reduction.

use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

fn small_ring() -> PolyRing {
    PolyRing::new(BigUint::from(97u32), PolyModulus::new(4))
}

fn elem(ring: &PolyRing, coeffs: [u32; 4]) -> RingElement {
    ring.from_coeffs(coeffs.into_iter().map(BigUint::from).collect())
}

#[test]
fn add_reduces_modulo_q() {
    let ring = small_ring();
    let a = elem(&ring, [90, 0, 0, 0]);
    let b = elem(&ring, [10, 0, 0, 0]);
    let sum = &a + &b;
    assert_eq!(sum.coeffs()[0], BigUint::from(3u32));
}

#[test]
fn sub_wraps_around_modulus() {
    let ring = small_ring();
    let a = elem(&ring, [1, 0, 0, 0]);
    let b = elem(&ring, [5, 0, 0, 0]);
    let diff = &a - &b;
    assert_eq!(diff.coeffs()[0], BigUint::from(93u32));
}

#[test]
fn neg_of_zero_is_zero() {
    let ring = small_ring();
    let zero = ring.zero();
    assert_eq!((-&zero).coeffs(), zero.coeffs());
}

#[test]
fn mul_by_one_is_identity() {
    let ring = small_ring();
    let one = elem(&ring, [1, 0, 0, 0]);
    let a = elem(&ring, [3, 5, 7, 11]);
    let product = &a * &one;
    assert_eq!(product.coeffs(), a.coeffs());
}

#[test]
fn mul_folds_high_terms_with_sign_flip() {
    // x^3 * x^1 = x^4 = x^N, which reduces to -1 in a degree-4 ring.
    let ring = small_ring();
    let x3 = elem(&ring, [0, 0, 0, 1]);
    let x1 = elem(&ring, [0, 1, 0, 0]);
    let product = &x3 * &x1;
    assert_eq!(product.coeffs(), &[BigUint::from(96u32), BigUint::from(0u32), BigUint::from(0u32), BigUint::from(0u32)]);
}

#[test]
fn mul_folds_and_accumulates_across_the_wrap() {
    // (1 + x^3) * (1 + x^3) = 1 + 2x^3 + x^6 = 1 + 2x^3 - x^2
    let ring = small_ring();
    let a = elem(&ring, [1, 0, 0, 1]);
    let product = &a * &a;
    assert_eq!(
        product.coeffs(),
        &[
            BigUint::from(1u32),
            BigUint::from(0u32),
            BigUint::from(96u32),
            BigUint::from(2u32),
        ]
    );
}

#[test]
fn lift_changes_modulus_without_reducing_coefficients() {
    let ring = small_ring();
    let a = elem(&ring, [50, 0, 0, 0]);
    let lifted = a.lift(BigUint::from(1_000_000u32));
    assert_eq!(lifted.modulus(), &BigUint::from(1_000_000u32));
    assert_eq!(lifted.coeffs()[0], BigUint::from(50u32));

    let oversized = a.lift(BigUint::from(10u32));
    assert_eq!(oversized.coeffs()[0], BigUint::from(50u32), "lift must not reduce");
    assert_eq!(oversized.reduce().coeffs()[0], BigUint::from(0u32));
}

#[test]
fn sample_uniform_respects_the_bound_and_degree() {
    let ring = small_ring();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let bound = BigUint::from(10u32);
    let sample = ring.sample_uniform(Some(&bound), &mut rng);
    assert_eq!(sample.degree(), 4);
    for c in sample.coeffs() {
        assert!(c < &bound);
    }
}

#[test]
fn sample_uniform_is_deterministic_under_a_fixed_seed() {
    let ring = small_ring();
    let mut rng_a = ChaCha8Rng::seed_from_u64(7);
    let mut rng_b = ChaCha8Rng::seed_from_u64(7);
    let a = ring.sample_uniform(None, &mut rng_a);
    let b = ring.sample_uniform(None, &mut rng_b);
    assert_eq!(a.coeffs(), b.coeffs());
}
