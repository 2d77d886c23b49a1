//! Tests for the concrete encrypt/decrypt scenarios from the scheme's
//! test vectors.

use num_bigint::BigUint;

use super::*;
use crate::encoding::PolynomialEncoder;
use crate::glwe::EncryptionParameters;
use crate::keys::gen_key_pair;

fn ints(values: &[u32]) -> Vec<BigUint> {
    values.iter().copied().map(BigUint::from).collect()
}

fn small_dist(seed: u64) -> GlweDistribution {
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
fn round_trips_the_first_golden_vector() {
    let dist = small_dist(0);
    let (sk, pk) = gen_key_pair(&dist, None);
    let encryptor = Encryptor::new(&dist, PolynomialEncoder::new(&dist));

    let cipher = encryptor.encrypt(&pk, &ints(&[1, 2, 3, 4])).unwrap();
    let decrypted = encryptor.decrypt(&sk, &cipher);
    assert_eq!(decrypted, ints(&[1, 2, 3, 4]));
}

#[test]
fn round_trips_with_a_larger_modulus_and_different_seed() {
    let params = EncryptionParameters::new(
        4,
        BigUint::from(12289u32),
        BigUint::from(127u32),
        BigUint::from(3u32),
        Some(1),
    )
    .unwrap();
    let dist = GlweDistribution::new(params).unwrap();
    let (sk, pk) = gen_key_pair(&dist, None);
    let encryptor = Encryptor::new(&dist, PolynomialEncoder::new(&dist));

    let cipher = encryptor.encrypt(&pk, &ints(&[5, 6, 7, 8])).unwrap();
    let decrypted = encryptor.decrypt(&sk, &cipher);
    assert_eq!(decrypted, ints(&[5, 6, 7, 8]));
}

#[test]
fn round_trips_zero_message() {
    let dist = small_dist(99);
    let (sk, pk) = gen_key_pair(&dist, None);
    let encryptor = Encryptor::new(&dist, PolynomialEncoder::new(&dist));

    let cipher = encryptor.encrypt(&pk, &ints(&[0, 0, 0, 0])).unwrap();
    let decrypted = encryptor.decrypt(&sk, &cipher);
    assert_eq!(decrypted, ints(&[0, 0, 0, 0]));
}

#[test]
fn encrypt_rejects_messages_longer_than_the_dimension() {
    let dist = small_dist(0);
    let (_sk, pk) = gen_key_pair(&dist, None);
    let encryptor = Encryptor::new(&dist, PolynomialEncoder::new(&dist));

    let err = encryptor.encrypt(&pk, &ints(&[1, 2, 3, 4, 5])).unwrap_err();
    assert_eq!(err, VenumError::MessageTooLong { max: 4, actual: 5 });
}
