//! Ciphertext types and the encryptor that produces and consumes them.

use num_bigint::BigUint;

use crate::encoding::Encoder;
use crate::error::VenumError;
use crate::glwe::{GlweDistribution, GlweSample};
use crate::keys::{PublicKey, RelinKey, SecretKey};
use crate::numeric::radix_decompose_poly;
use crate::ring::{PolyModulus, PolyRing, RingElement};

#[cfg(test)]
mod test;

/// A rank-1 GLWE ciphertext: the ordinary, decryptable ciphertext shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cipher {
    sample: GlweSample,
}

impl Cipher {
    /// Wraps a GLWE sample as a ciphertext.
    pub fn new(sample: GlweSample) -> Self {
        Self { sample }
    }

    /// The underlying GLWE sample.
    pub fn sample(&self) -> &GlweSample {
        &self.sample
    }
}

/// A rank-2 ciphertext: the non-normalized intermediate a homomorphic
/// multiplication produces before relinearization folds it back to rank 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rank2Cipher {
    constant: RingElement,
    linear: RingElement,
    quadratic: RingElement,
}

impl Rank2Cipher {
    /// Builds a rank-2 ciphertext from its constant, linear, and quadratic
    /// terms over the secret.
    pub fn new(constant: RingElement, linear: RingElement, quadratic: RingElement) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// The constant term.
    pub fn constant(&self) -> &RingElement {
        &self.constant
    }

    /// The linear term.
    pub fn linear(&self) -> &RingElement {
        &self.linear
    }

    /// The quadratic term.
    pub fn quadratic(&self) -> &RingElement {
        &self.quadratic
    }

    /// Relinearizes this rank-2 ciphertext back to a rank-1 [`Cipher`]
    /// using `relin_key`: the quadratic term is split into
    /// [`RelinKey::digit_count`] base-`b` components, each paired with the
    /// relinearization key's matching auxiliary sample and accumulated
    /// into the output mask and body, before folding in the linear and
    /// constant terms.
    pub fn relinearize(&self, relin_key: &RelinKey) -> Result<Cipher, VenumError> {
        let ring = PolyRing::new(
            self.quadratic.modulus().clone(),
            PolyModulus::new(self.quadratic.degree()),
        );
        let components = radix_decompose_poly(
            &self.quadratic,
            relin_key.base(),
            relin_key.digit_count(),
            &ring,
        )?;

        let mut mask = ring.zero();
        let mut body = ring.zero();
        for (aux_key, component) in relin_key.aux_keys().iter().zip(&components) {
            mask = &mask + &(aux_key.mask() * component);
            body = &body + &(aux_key.body() * component);
        }
        mask = &mask + &self.linear;
        body = &body + &self.constant;

        Ok(Cipher::new(GlweSample::new(mask, body)))
    }
}

/// Encrypts plaintext messages under a public key and decrypts
/// ciphertexts with the matching secret key.
pub struct Encryptor<'d> {
    dist: &'d GlweDistribution,
    encoder: Box<dyn Encoder>,
}

impl<'d> Encryptor<'d> {
    /// Builds an encryptor from the distribution it samples noise from and
    /// the plaintext encoder it uses by default.
    pub fn new(dist: &'d GlweDistribution, encoder: impl Encoder + 'static) -> Self {
        Self {
            dist,
            encoder: Box::new(encoder),
        }
    }

    /// Encrypts `message` under `pk`. Samples a blinding polynomial `u`
    /// with coefficients in `{0, 1}` and two CRT-packed noise terms, and
    /// returns `Cipher(mask = pk.mask*u + e2, body = pk.body*u + M' + e1)`
    /// where `M'` is the CRT-packed plaintext.
    pub fn encrypt(&self, pk: &PublicKey, message: &[BigUint]) -> Result<Cipher, VenumError> {
        tracing::debug!(len = message.len(), "encrypting message");

        let encoded = self.encoder.encode(message)?;
        let crt_message = self
            .dist
            .crt_encoder()
            .encode_pure_message(&encoded)
            .lift(self.dist.cipher_ring().modulus().clone());

        let noise_body = self.dist.sample_crt_noise();
        let noise_mask = self.dist.sample_crt_noise();
        let blinding = self.dist.sample_polynomial(Some(&BigUint::from(2u32)));

        let mask = &(pk.sample().mask() * &blinding) + &noise_mask;
        let body = &(&(pk.sample().body() * &blinding) + &crt_message) + &noise_body;

        Ok(Cipher::new(GlweSample::new(mask, body)))
    }

    /// Decrypts `cipher` with `sk`: recomputes `c = body + mask*s` and
    /// runs it through the plaintext encoder's noise-tolerant decode.
    ///
    /// The encoder's decode already performs the CRT-style extraction
    /// (recentering, then reduction mod `P = p0*p1`, then mod `p0`) that
    /// [`crate::crt::CrtPacker::decode`] performs on a clean, noise-free
    /// packed value; feeding the *raw* recombined coefficient (still in
    /// `[0, q)`, not yet split by the CRT packer) through it is what makes
    /// the recentering term `k` do anything. CRT-splitting first and then
    /// decoding the already-mod-`p0` result, as a too-literal reading of
    /// the spec's prose suggests, makes the recentering step a no-op: `k`
    /// is always constructed as a multiple of `P`, so re-applying the
    /// formula to a value already reduced mod `p0` leaves it unchanged.
    pub fn decrypt(&self, sk: &SecretKey, cipher: &Cipher) -> Vec<BigUint> {
        let sample = cipher.sample();
        let combined = &(sample.mask() * sk.secret()) + sample.body();
        tracing::debug!(?combined, "recombined ciphertext");

        self.encoder.decode(&combined)
    }
}
