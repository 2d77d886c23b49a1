//! Tests for parameter validation and GLWE sampling.

use num_bigint::BigUint;

use super::*;

fn params(seed: Option<u64>) -> EncryptionParameters {
    EncryptionParameters::new(
        4,
        BigUint::from(383u32),
        BigUint::from(127u32),
        BigUint::from(3u32),
        seed,
    )
    .unwrap()
}

#[test]
fn rejects_parameters_that_overflow_the_crt_cell() {
    let err = EncryptionParameters::new(
        4,
        BigUint::from(380u32),
        BigUint::from(127u32),
        BigUint::from(3u32),
        None,
    )
    .unwrap_err();
    assert_eq!(err, VenumError::InvalidParameters);
}

#[test]
fn accepts_parameters_with_room_to_spare() {
    assert!(params(None).ciphertext_modulus() == &BigUint::from(383u32));
}

#[test]
fn sample_polynomial_respects_explicit_bound() {
    let dist = GlweDistribution::new(params(Some(1))).unwrap();
    let bound = BigUint::from(3u32);
    let sample = dist.sample_polynomial(Some(&bound));
    assert_eq!(sample.degree(), 4);
    for c in sample.coeffs() {
        assert!(c < &bound);
    }
}

#[test]
fn seeded_sessions_are_deterministic() {
    let dist_a = GlweDistribution::new(params(Some(42))).unwrap();
    let dist_b = GlweDistribution::new(params(Some(42))).unwrap();

    let mask_a = dist_a.sample_mask();
    let mask_b = dist_b.sample_mask();
    assert_eq!(mask_a.coeffs(), mask_b.coeffs());

    let noise_a = dist_a.sample_noise();
    let noise_b = dist_b.sample_noise();
    assert_eq!(noise_a.coeffs(), noise_b.coeffs());
}

#[test]
fn sample_zero_secret_decrypts_to_the_crt_noise() {
    let dist = GlweDistribution::new(params(Some(7))).unwrap();
    let secret = dist.sample_mask();
    let sample = dist.sample_zero_secret(&secret);

    // body + mask * secret == the CRT-packed noise that was added in: a
    // pure-noise encoding is congruent to 0 mod p0 in every coefficient,
    // and small enough (< p0*p1) to survive the mod-q reduction intact.
    let reconstructed = &(&sample.mask * &secret) + sample.body();
    let p0 = BigUint::from(127u32);
    for c in reconstructed.coeffs() {
        assert_eq!(c % &p0, BigUint::from(0u32));
    }
}
