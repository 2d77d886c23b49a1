//! Encryption parameters and the GLWE distribution they induce.
//!
//! [`GlweDistribution`] is the hub every other component reaches through:
//! it owns the plaintext ring `R_p0`, the cipher ring `R_q`, the CRT packer
//! bound to the plaintext ring, and the session's sampling RNG. Keys are
//! generated by passing a `&GlweDistribution` into their constructors
//! rather than storing a back-reference, so there is no reference cycle
//! between a key and the distribution that produced it.

use std::cell::RefCell;
use std::sync::Once;

use num_bigint::BigUint;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::crt::CrtPacker;
use crate::error::VenumError;
use crate::ring::{PolyModulus, PolyRing, RingElement};
use crate::rns::RnsBasis;

#[cfg(test)]
mod test;

/// Parameters for the encryption scheme: the polynomial dimension `N`, the
/// ciphertext modulus `q`, the plaintext modulus `p0`, the noise modulus
/// `p1`, and an optional seed for deterministic sampling.
///
/// Construction enforces `p0 * p1 < q`, the hard constraint that keeps a
/// CRT-packed (message, noise) pair from overflowing a single coefficient
/// of `R_q`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionParameters {
    dimension: usize,
    ciphertext_modulus: BigUint,
    plaintext_modulus: BigUint,
    noise_modulus: BigUint,
    seed: Option<u64>,
}

impl EncryptionParameters {
    /// Builds a new parameter set, failing with
    /// [`VenumError::InvalidParameters`] if `plaintext_modulus *
    /// noise_modulus >= ciphertext_modulus`.
    pub fn new(
        dimension: usize,
        ciphertext_modulus: BigUint,
        plaintext_modulus: BigUint,
        noise_modulus: BigUint,
        seed: Option<u64>,
    ) -> Result<Self, VenumError> {
        if &plaintext_modulus * &noise_modulus >= ciphertext_modulus {
            return Err(VenumError::InvalidParameters);
        }
        Ok(Self {
            dimension,
            ciphertext_modulus,
            plaintext_modulus,
            noise_modulus,
            seed,
        })
    }

    /// The polynomial dimension `N`.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The ciphertext modulus `q`.
    pub fn ciphertext_modulus(&self) -> &BigUint {
        &self.ciphertext_modulus
    }

    /// The plaintext modulus `p0`.
    pub fn plaintext_modulus(&self) -> &BigUint {
        &self.plaintext_modulus
    }

    /// The noise modulus `p1`.
    pub fn noise_modulus(&self) -> &BigUint {
        &self.noise_modulus
    }

    /// The deterministic sampling seed, if one was supplied.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// A GLWE sample: a pair `(mask, body)` of polynomials in `R_q` such that
/// `body + mask * s` decodes, under the matching secret `s`, to a message
/// polynomial plus noise.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Constructor)]
pub struct GlweSample {
    mask: RingElement,
    body: RingElement,
}

impl GlweSample {
    /// The mask component `a`.
    pub fn mask(&self) -> &RingElement {
        &self.mask
    }

    /// The body component `b`.
    pub fn body(&self) -> &RingElement {
        &self.body
    }
}

static INSECURE_NOISE_WARNING: Once = Once::new();

/// The GLWE distribution a session is built around: the plaintext and
/// cipher rings, the polynomial modulus, the CRT packer, and the sampling
/// RNG. Constructed once per session; every key, ciphertext, and evaluator
/// in the session reaches its sampling primitives through a `&GlweDistribution`.
pub struct GlweDistribution {
    params: EncryptionParameters,
    plaintext_ring: PolyRing,
    cipher_ring: PolyRing,
    poly_modulus: PolyModulus,
    crt_encoder: CrtPacker,
    rng: RefCell<Box<dyn RngCore>>,
}

impl GlweDistribution {
    /// Builds the plaintext ring `R_p0`, the cipher ring `R_q`, the
    /// polynomial modulus `x^N + 1`, and a CRT packer bound to `[p0, p1]`.
    ///
    /// When `params` carries a seed, the distribution's RNG is a
    /// [`ChaCha8Rng`] seeded deterministically; otherwise it falls back to
    /// the process-default thread RNG.
    pub fn new(params: EncryptionParameters) -> Result<Self, VenumError> {
        if let Some(seed) = params.seed() {
            tracing::warn!(seed, "setting random seed");
        }

        let poly_modulus = PolyModulus::new(params.dimension());
        let plaintext_ring = PolyRing::new(params.plaintext_modulus().clone(), poly_modulus);
        let cipher_ring = PolyRing::new(params.ciphertext_modulus().clone(), poly_modulus);

        let crt_basis = RnsBasis::new(vec![
            params.plaintext_modulus().clone(),
            params.noise_modulus().clone(),
        ])?;
        let crt_encoder = CrtPacker::new(crt_basis, plaintext_ring.clone())?;

        let rng: Box<dyn RngCore> = match params.seed() {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        };

        Ok(Self {
            params,
            plaintext_ring,
            cipher_ring,
            poly_modulus,
            crt_encoder,
            rng: RefCell::new(rng),
        })
    }

    /// The scheme's parameters.
    pub fn params(&self) -> &EncryptionParameters {
        &self.params
    }

    /// The plaintext ring `R_p0`.
    pub fn plaintext_ring(&self) -> &PolyRing {
        &self.plaintext_ring
    }

    /// The cipher ring `R_q`.
    pub fn cipher_ring(&self) -> &PolyRing {
        &self.cipher_ring
    }

    /// The polynomial modulus `x^N + 1`.
    pub fn poly_modulus(&self) -> PolyModulus {
        self.poly_modulus
    }

    /// The CRT packer bound to the plaintext ring.
    pub fn crt_encoder(&self) -> &CrtPacker {
        &self.crt_encoder
    }

    /// Samples a uniform random element of `R_q` with coefficients drawn
    /// from `[0, modulus)`, or from `[0, q)` when `modulus` is omitted.
    pub fn sample_polynomial(&self, modulus: Option<&BigUint>) -> RingElement {
        let bound = modulus.unwrap_or_else(|| self.params.ciphertext_modulus());
        let sample = self
            .cipher_ring
            .sample_uniform(Some(bound), &mut *self.rng.borrow_mut());
        tracing::debug!(?sample, "sampled polynomial");
        sample
    }

    /// `sample_polynomial(None)`.
    pub fn sample_mask(&self) -> RingElement {
        self.sample_polynomial(None)
    }

    /// Samples a noise polynomial with coefficients uniform over `[0,
    /// p1)`.
    ///
    /// This distribution is not cryptographically secure: a real GLWE
    /// instantiation needs noise drawn from a sub-Gaussian (e.g. discrete
    /// Gaussian) distribution. It is kept uniform here to reproduce the
    /// documented shape of the scheme; swap this method out for a secure
    /// sampler before using this crate for anything but experimentation.
    pub fn sample_noise(&self) -> RingElement {
        INSECURE_NOISE_WARNING.call_once(|| {
            tracing::warn!("noise is sampled uniformly, which is not cryptographically secure");
        });
        self.sample_polynomial(Some(self.params.noise_modulus()))
    }

    /// Samples a noise polynomial and CRT-packs it with an all-zero
    /// message component, lifted into `R_q`.
    pub fn sample_crt_noise(&self) -> RingElement {
        let noise = self.sample_noise();
        let packed = self.crt_encoder.encode_pure_noise(&noise);
        packed.lift(self.cipher_ring.modulus().clone())
    }

    /// Produces a GLWE sample encrypting zero under `secret`: samples a
    /// mask `a` and CRT-packed noise `e`, computes `body = a*secret + e`,
    /// and returns `(-a, body)`, so that `body + (-a)*secret = e`.
    pub fn sample_zero_secret(&self, secret: &RingElement) -> GlweSample {
        let mask = self.sample_mask();
        let noise = self.sample_crt_noise();
        let body = &(&mask * secret) + &noise;
        tracing::debug!(?body, "sampled zero-encryption");
        GlweSample::new(-&mask, body)
    }
}
