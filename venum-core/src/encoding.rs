//! Plaintext encoders: mapping integer message vectors to and from
//! polynomials in the plaintext ring `R_p0`.
//!
//! [`Encoder`] is a closed-set interface: the scheme currently ships one
//! production implementor, [`PolynomialEncoder`]. A second encoder (a
//! batched, CRT-style packer across multiple plaintext slots) was stubbed
//! in the source this crate is built from but never implemented; it is
//! treated as a future extension and is not provided here.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::VenumError;
use crate::glwe::GlweDistribution;
use crate::ring::{PolyRing, RingElement};


/// The interface a plaintext encoder must implement: turning an integer
/// message vector into a polynomial in `R_p0`, and back.
pub trait Encoder {
    /// Encodes a message into a polynomial. Fails with
    /// [`VenumError::MessageTooLong`] if `message` has more coefficients
    /// than the ring dimension.
    fn encode(&self, message: &[BigUint]) -> Result<RingElement, VenumError>;

    /// Decodes a polynomial back into an integer vector of ring-dimension
    /// length.
    fn decode(&self, poly: &RingElement) -> Vec<BigUint>;
}

/// The default plaintext encoder: a direct coefficient embedding with a
/// noise-tolerant recentering step on decode.
pub struct PolynomialEncoder {
    dimension: usize,
    plaintext_ring: PolyRing,
    ciphertext_modulus: BigUint,
    plaintext_modulus: BigUint,
    noise_modulus: BigUint,
}

impl PolynomialEncoder {
    /// Builds an encoder from the moduli and ring dimension of `dist`.
    pub fn new(dist: &GlweDistribution) -> Self {
        Self {
            dimension: dist.params().dimension(),
            plaintext_ring: dist.plaintext_ring().clone(),
            ciphertext_modulus: dist.params().ciphertext_modulus().clone(),
            plaintext_modulus: dist.params().plaintext_modulus().clone(),
            noise_modulus: dist.params().noise_modulus().clone(),
        }
    }
}

impl Encoder for PolynomialEncoder {
    /// Maps `message` to a polynomial in `R_p0` whose `j`-th (least
    /// significant) coefficient is `message[j]`. Shorter messages are
    /// zero-padded to the ring dimension.
    fn encode(&self, message: &[BigUint]) -> Result<RingElement, VenumError> {
        if message.len() > self.dimension {
            return Err(VenumError::MessageTooLong {
                max: self.dimension,
                actual: message.len(),
            });
        }
        let mut coeffs = message.to_vec();
        coeffs.resize(self.dimension, BigUint::zero());
        Ok(self.plaintext_ring.from_coeffs(coeffs))
    }

    /// Recovers the plaintext vector from a (possibly noisy) polynomial.
    ///
    /// For each coefficient `c`, let `P = p0 * p1` and `k = floor(q /
    /// (2*P)) * P`. The recovered coefficient is `(((c + k) mod q) mod P)
    /// mod p0`: adding `k` and reducing mod `q` recenters a noisy
    /// coefficient so the correct plaintext representative falls in a
    /// canonical CRT cell, and the two inner reductions extract the
    /// plaintext dimension out of that cell.
    fn decode(&self, poly: &RingElement) -> Vec<BigUint> {
        let big_p = &self.plaintext_modulus * &self.noise_modulus;
        let k = (&self.ciphertext_modulus / (&big_p * 2u32)) * &big_p;

        let mut coeffs: Vec<BigUint> = poly
            .coeffs()
            .iter()
            .map(|c| {
                let recentered = (c + &k) % &self.ciphertext_modulus;
                (recentered % &big_p) % &self.plaintext_modulus
            })
            .collect();
        coeffs.resize(self.dimension, BigUint::zero());
        coeffs
    }
}
