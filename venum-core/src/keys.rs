//! Secret, public, and relinearization keys.
//!
//! Keys never hold a back-reference to the [`GlweDistribution`] that
//! produced them: the distribution's sampling primitives are only needed
//! during generation, so it is passed in as a constructor argument instead
//! of stored, which avoids a reference cycle between a key and its owning
//! distribution.

use num_bigint::BigUint;
use num_traits::Zero;
use static_assertions::const_assert;

use crate::glwe::{GlweDistribution, GlweSample};
use crate::ring::RingElement;

#[cfg(test)]
mod test;

/// The base used for relinearization key digit decomposition when the
/// caller does not specify one.
pub const DEFAULT_RELIN_BASE: u64 = 2;
const_assert!(DEFAULT_RELIN_BASE >= 2);

/// A secret key: a polynomial `s` sampled from the distribution's ring,
/// optionally from a smaller modulus than `q`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey {
    secret: RingElement,
}

impl SecretKey {
    /// Samples a fresh secret key from `dist`. `modulus` lets callers draw
    /// `s` from a smaller distribution than the full ciphertext modulus.
    pub fn rand(dist: &GlweDistribution, modulus: Option<&BigUint>) -> Self {
        let secret = dist.sample_polynomial(modulus);
        tracing::debug!(?secret, "generating random secret key");
        Self { secret }
    }

    /// The secret polynomial `s`.
    pub fn secret(&self) -> &RingElement {
        &self.secret
    }
}

/// A public key: one GLWE sample encrypting zero under the matching secret key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    sample: GlweSample,
}

impl PublicKey {
    /// Derives a public key from a secret key, using `dist`'s sampling
    /// primitives to build the zero-encryption.
    pub fn from_secret_key(dist: &GlweDistribution, secret_key: &SecretKey) -> Self {
        let sample = dist.sample_zero_secret(secret_key.secret());
        tracing::debug!(?sample, "generating public key");
        Self { sample }
    }

    /// The underlying GLWE sample.
    pub fn sample(&self) -> &GlweSample {
        &self.sample
    }
}

/// Generates a secret/public key pair. `modulus` is forwarded to
/// [`SecretKey::rand`].
pub fn gen_key_pair(dist: &GlweDistribution, modulus: Option<&BigUint>) -> (SecretKey, PublicKey) {
    let sk = SecretKey::rand(dist, modulus);
    let pk = PublicKey::from_secret_key(dist, &sk);
    (sk, pk)
}

/// A relinearization key: a sequence of GLWE samples, the `i`-th of which
/// encrypts `b^i * s^2` under `s`, used to reduce a rank-2 ciphertext back
/// to rank 1 after a homomorphic multiplication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelinKey {
    aux_keys: Vec<GlweSample>,
    base: u64,
}

impl RelinKey {
    /// Derives a relinearization key from `secret_key` in the given base
    /// (`2` is the conventional default). The digit count `d = ceil(log_b
    /// q)` determines both the key's length and the decomposition
    /// [`crate::evaluation::Evaluator::mul`] performs at multiplication time.
    pub fn from_secret_key(dist: &GlweDistribution, secret_key: &SecretKey, base: u64) -> Self {
        let digit_count = digit_count_for_base(dist.params().ciphertext_modulus(), base);
        let s2 = secret_key.secret() * secret_key.secret();

        let mut aux_keys = Vec::with_capacity(digit_count);
        let mut power = BigUint::from(1u32);
        let base_big = BigUint::from(base);
        for _ in 0..digit_count {
            let mask = dist.sample_mask();
            let noise = dist.sample_crt_noise();
            let masked_secret = &mask * secret_key.secret();
            let noisy_secret = &masked_secret + &noise;
            let scaled_s2 = s2.scale(&power);
            let body = &noisy_secret + &scaled_s2;
            aux_keys.push(GlweSample::new(-&mask, body));
            power *= &base_big;
        }

        tracing::debug!(digit_count, base, "generating relinearization key");
        Self { aux_keys, base }
    }

    /// The auxiliary GLWE samples, in ascending power-of-`base` order.
    pub fn aux_keys(&self) -> &[GlweSample] {
        &self.aux_keys
    }

    /// The decomposition base `b`.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// The digit count `d = ceil(log_b q)`, the length of [`Self::aux_keys`].
    pub fn digit_count(&self) -> usize {
        self.aux_keys.len()
    }
}

/// The number of base-`radix` digits needed to represent any value in `[0,
/// modulus)`, i.e. `ceil(log_radix(modulus))`. Computed as the digit count
/// of `modulus - 1`, the largest representable value, so that an exact
/// power of `radix` (e.g. `modulus = 256, radix = 2`) yields `8`, not `9`.
fn digit_count_for_base(modulus: &BigUint, radix: u64) -> usize {
    let radix_big = BigUint::from(radix);
    let mut remaining = modulus - 1u32;
    let mut count = 0usize;
    while !remaining.is_zero() {
        remaining /= &radix_big;
        count += 1;
    }
    count.max(1)
}
