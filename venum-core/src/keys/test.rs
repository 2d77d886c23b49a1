//! Tests for key generation.

use num_bigint::BigUint;

use super::*;
use crate::glwe::EncryptionParameters;

fn dist(seed: u64) -> GlweDistribution {
    let params = EncryptionParameters::new(
        4,
        BigUint::from(383u32),
        BigUint::from(127u32),
        BigUint::from(3u32),
        Some(seed),
    )
    .unwrap();
    GlweDistribution::new(params).unwrap()
}

#[test]
fn public_key_decrypts_zero_under_the_secret() {
    let d = dist(1);
    let (sk, pk) = gen_key_pair(&d, None);
    let sample = pk.sample();
    let recombined = &(sample.mask() * sk.secret()) + sample.body();
    // A zero-encryption's mask*s term cancels exactly against pk's own
    // construction, leaving the CRT-packed pure noise: every coefficient
    // is congruent to 0 mod p0, and small enough (< p0*p1) to survive the
    // mod-q reduction intact.
    let p0 = BigUint::from(127u32);
    for c in recombined.coeffs() {
        assert_eq!(c % &p0, BigUint::from(0u32));
    }
}

#[test]
fn secret_key_rand_respects_a_smaller_modulus() {
    let d = dist(2);
    let bound = BigUint::from(2u32);
    let sk = SecretKey::rand(&d, Some(&bound));
    for c in sk.secret().coeffs() {
        assert!(c < &bound);
    }
}

#[test]
fn relin_key_digit_count_matches_ceil_log_base_q() {
    let d = dist(3);
    let (sk, _pk) = gen_key_pair(&d, None);
    let rk = RelinKey::from_secret_key(&d, &sk, 2);
    // q = 383 needs 9 base-2 digits: 2^8 = 256 <= 383 < 512 = 2^9.
    assert_eq!(rk.digit_count(), 9);
    assert_eq!(rk.aux_keys().len(), rk.digit_count());
    assert_eq!(rk.base(), 2);
}

#[test]
fn digit_count_for_base_handles_exact_powers() {
    // 256 = 2^8 needs exactly 8 base-2 digits (0..=255), not 9.
    assert_eq!(digit_count_for_base(&BigUint::from(256u32), 2), 8);
    assert_eq!(digit_count_for_base(&BigUint::from(1u32), 2), 1);
}
