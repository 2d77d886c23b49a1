//! Tests for digit extraction and radix decomposition.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand::Rng;

use super::*;
use crate::ring::{PolyModulus, PolyRing};

#[test]
fn nth_digit_radix_2() {
    let expected = [
        1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0,
        1,
    ];
    let n = BigInt::from(1_234_512_345_i64);
    for (i, &digit) in expected.iter().rev().enumerate() {
        assert_eq!(nth_digit(&n, 2, i as i64).unwrap(), BigUint::from(digit as u8));
    }
}

#[test]
fn nth_digit_radix_10() {
    let n = BigInt::from(1_234_512_345_i64);
    let expected = [5u8, 4, 3, 2, 1, 5, 4, 3, 2, 1];
    for (i, &digit) in expected.iter().enumerate() {
        assert_eq!(nth_digit(&n, 10, i as i64).unwrap(), BigUint::from(digit));
    }
}

#[test]
fn nth_digit_zero_and_one() {
    assert_eq!(nth_digit(&BigInt::from(0), 2, 0).unwrap(), BigUint::from(0u8));
    assert_eq!(nth_digit(&BigInt::from(1), 2, 0).unwrap(), BigUint::from(1u8));
    assert_eq!(nth_digit(&BigInt::from(10), 2, 0).unwrap(), BigUint::from(0u8));
    assert_eq!(nth_digit(&BigInt::from(10), 2, 1).unwrap(), BigUint::from(1u8));
}

#[test]
fn nth_digit_rejects_negative_number() {
    assert_eq!(
        nth_digit(&BigInt::from(-1), 2, 0),
        Err(VenumError::DomainError("number must be non-negative".into()))
    );
}

#[test]
fn nth_digit_rejects_small_radix() {
    assert!(nth_digit(&BigInt::from(10), 1, 0).is_err());
    assert!(nth_digit(&BigInt::from(10), 0, 0).is_err());
}

#[test]
fn nth_digit_rejects_negative_index() {
    assert!(nth_digit(&BigInt::from(10), 2, -1).is_err());
}

#[test]
fn radix_decompose_poly_reconstructs_value() {
    let ring = PolyRing::new(BigUint::from(1_000_000_007u64), PolyModulus::new(4));
    let element = ring.from_coeffs(vec![
        BigUint::from(10u32),
        BigUint::from(100u32),
        BigUint::from(1000u32),
        BigUint::from(0u32),
    ]);

    let base = 2u64;
    let digit_count = 12;
    let components = radix_decompose_poly(&element, base, digit_count, &ring).unwrap();
    assert_eq!(components.len(), digit_count);

    for coeff_idx in 0..4 {
        let mut reconstructed = BigUint::from(0u32);
        for (i, component) in components.iter().enumerate() {
            reconstructed += component.coeffs()[coeff_idx].clone() * BigUint::from(base).pow(i as u32);
        }
        assert_eq!(reconstructed, element.coeffs()[coeff_idx]);
    }
}

/// `sum_i(nth_digit(n, b, i) * b^i) == n` for enough digits, over a
/// spread of random numbers and radixes, per `spec.md` §8's radix
/// decomposition invariant.
#[test]
fn nth_digit_reconstructs_the_number_over_random_inputs() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let n = venum_test::generators::rand_small_nonnegative_int(&mut rng);
        let radix = rng.gen_range(2u64..16);

        let digit_count = 64;
        let n_big = BigInt::from(n);
        let mut reconstructed = BigUint::zero();
        let mut power = BigUint::from(1u32);
        let radix_big = BigUint::from(radix);
        for i in 0..digit_count {
            let digit = nth_digit(&n_big, radix, i).unwrap();
            reconstructed += digit * &power;
            power *= &radix_big;
        }
        assert_eq!(reconstructed, BigUint::from(n));
    }
}
