//! Literal parameter sets and golden vectors, lifted verbatim from the
//! scheme's concrete test scenarios.

use num_bigint::BigUint;
use venum_core::EncryptionParameters;

lazy_static::lazy_static! {
    /// `N=4, q=383, p0=127, p1=3, seed=0`: the scheme's smallest golden
    /// parameter set, used for the `[1,2,3,4]` round-trip and addition
    /// scenarios.
    pub static ref SMALL_PARAMS: EncryptionParameters = EncryptionParameters::new(
        4,
        BigUint::from(383u32),
        BigUint::from(127u32),
        BigUint::from(3u32),
        Some(0),
    )
    .expect("golden parameters satisfy p0*p1 < q by construction");

    /// `N=4, q=12289, p0=127, p1=3, seed=1`: a larger ciphertext modulus
    /// with the same plaintext/noise moduli, used for the `[5,6,7,8]`
    /// round-trip scenario.
    pub static ref MEDIUM_PARAMS: EncryptionParameters = EncryptionParameters::new(
        4,
        BigUint::from(12289u32),
        BigUint::from(127u32),
        BigUint::from(3u32),
        Some(1),
    )
    .expect("golden parameters satisfy p0*p1 < q by construction");

    /// `N=4, q=1400472361734830353, p0=12289, p1=3`: the large-modulus
    /// parameter set used for the additive homomorphism scenarios, where
    /// `q` exceeds `u64` and requires arbitrary-precision arithmetic.
    pub static ref LARGE_PARAMS: EncryptionParameters = EncryptionParameters::new(
        4,
        "1400472361734830353".parse().expect("valid decimal literal"),
        BigUint::from(12289u32),
        BigUint::from(3u32),
        None,
    )
    .expect("golden parameters satisfy p0*p1 < q by construction");
}

/// The message from the first round-trip scenario: encrypting this under
/// [`SMALL_PARAMS`] and decrypting must recover it unchanged.
pub fn small_message() -> Vec<BigUint> {
    [1u32, 2, 3, 4].into_iter().map(BigUint::from).collect()
}

/// The message from the second round-trip scenario, paired with
/// [`MEDIUM_PARAMS`].
pub fn medium_message() -> Vec<BigUint> {
    [5u32, 6, 7, 8].into_iter().map(BigUint::from).collect()
}

/// The two addends from the large-modulus additive homomorphism scenario,
/// which must decrypt to `[10005, 10005, 10005, 10005]` after a
/// homomorphic add.
pub fn large_addends() -> (Vec<BigUint>, Vec<BigUint>) {
    let a = [10001u32, 10002, 10003, 10004]
        .into_iter()
        .map(BigUint::from)
        .collect();
    let b = [4u32, 3, 2, 1].into_iter().map(BigUint::from).collect();
    (a, b)
}
