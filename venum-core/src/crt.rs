//! CRT packing of a plaintext polynomial and a noise polynomial into a
//! single polynomial, coefficient by coefficient, via the Chinese Remainder
//! Theorem.
//!
//! Each coefficient pair `(message_i, noise_i)` is packed into one value via
//! [`Rns::to_int`] against a two-modulus basis `(p0, p1)`: the packed value
//! is congruent to `message_i mod p0` and `noise_i mod p1`. Decoding runs the
//! same basis's [`RnsBasis::to_rns`] in reverse to recover both components.

use num_bigint::BigInt;

use crate::error::VenumError;
use crate::ring::{PolyRing, RingElement};
use crate::rns::{Rns, RnsBasis};


/// Packs and unpacks a message/noise coefficient pair using a two-modulus
/// CRT basis `(p0, p1)`.
///
/// `plaintext_ring` is the ring the packed output is tagged with. Per the
/// CRT packing scheme, the packed value itself ranges over `[0, p0*p1)` and
/// is not reduced modulo the plaintext ring's own modulus at packing time:
/// the tag only fixes which ring the value belongs to once it is lifted
/// into the ciphertext ring ahead of encryption. Callers that need a
/// canonical representative in the plaintext ring should call
/// [`RingElement::reduce`] explicitly.
pub struct CrtPacker {
    basis: RnsBasis,
    plaintext_ring: PolyRing,
}

impl CrtPacker {
    /// Builds a packer from a two-modulus basis and the plaintext ring its
    /// output is tagged with. Fails with [`VenumError::BasisArity`] unless
    /// the basis has exactly two moduli.
    pub fn new(basis: RnsBasis, plaintext_ring: PolyRing) -> Result<Self, VenumError> {
        if basis.len() != 2 {
            return Err(VenumError::BasisArity {
                expected: 2,
                actual: basis.len(),
            });
        }
        Ok(Self {
            basis,
            plaintext_ring,
        })
    }

    /// The CRT basis `(p0, p1)`.
    pub fn basis(&self) -> &RnsBasis {
        &self.basis
    }

    /// The ring packed output is tagged with.
    pub fn plaintext_ring(&self) -> &PolyRing {
        &self.plaintext_ring
    }

    fn encode_coef(&self, message: &BigInt, noise: &BigInt) -> num_bigint::BigUint {
        Rns::from_residues(
            self.basis.clone(),
            vec![
                self.basis.to_rns(message).residues()[0].clone(),
                self.basis.to_rns(noise).residues()[1].clone(),
            ],
        )
        .expect("basis arity matches by construction")
        .to_int()
    }

    /// Packs a message polynomial and a noise polynomial, coefficient by
    /// coefficient, into one polynomial in the plaintext ring. Both
    /// polynomials must have the same degree as the plaintext ring.
    pub fn encode(&self, message: &RingElement, noise: &RingElement) -> RingElement {
        debug_assert_eq!(message.coeffs().len(), self.plaintext_ring.degree());
        debug_assert_eq!(noise.coeffs().len(), self.plaintext_ring.degree());
        let coeffs = message
            .coeffs()
            .iter()
            .zip(noise.coeffs())
            .map(|(m, n)| self.encode_coef(&BigInt::from(m.clone()), &BigInt::from(n.clone())))
            .collect();
        untagged_from_coeffs(&self.plaintext_ring, coeffs)
    }

    /// Packs `message` with an all-zero noise component.
    pub fn encode_pure_message(&self, message: &RingElement) -> RingElement {
        self.encode(message, &self.plaintext_ring.zero())
    }

    /// Packs `noise` with an all-zero message component.
    pub fn encode_pure_noise(&self, noise: &RingElement) -> RingElement {
        self.encode(&self.plaintext_ring.zero(), noise)
    }

    /// Unpacks a CRT-encoded polynomial back into its message and noise
    /// components, each reduced modulo its own basis modulus.
    pub fn decode(&self, packed: &RingElement) -> (RingElement, RingElement) {
        let mut message_coeffs = Vec::with_capacity(packed.coeffs().len());
        let mut noise_coeffs = Vec::with_capacity(packed.coeffs().len());
        for coeff in packed.coeffs() {
            let rns = self.basis.to_rns(&BigInt::from(coeff.clone()));
            message_coeffs.push(rns.residues()[0].clone());
            noise_coeffs.push(rns.residues()[1].clone());
        }
        (
            untagged_from_coeffs(&self.plaintext_ring, message_coeffs),
            untagged_from_coeffs(&self.plaintext_ring, noise_coeffs),
        )
    }
}

/// Builds a ring element tagged with `ring`'s modulus without reducing the
/// supplied coefficients against it, since CRT-packed values legitimately
/// range over `[0, p0*p1)`, which may exceed the plaintext ring's own
/// modulus. `PolyRing::from_coeffs` would reduce mod q, which is exactly
/// what must not happen here.
fn untagged_from_coeffs(ring: &PolyRing, coeffs: Vec<num_bigint::BigUint>) -> RingElement {
    let mut lifted = ring.zero().lift(ring.modulus().clone());
    lifted.coeffs_mut().clone_from_slice(&coeffs);
    lifted
}
