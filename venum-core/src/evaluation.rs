//! Homomorphic evaluation: addition, subtraction, and (gated) multiplication.

use crate::encryption::Cipher;
#[cfg(feature = "unstable-mul")]
use crate::encryption::Rank2Cipher;
use crate::error::VenumError;
use crate::glwe::{GlweDistribution, GlweSample};
use crate::keys::RelinKey;


/// Performs homomorphic arithmetic on ciphertexts produced by an
/// [`crate::encryption::Encryptor`] sharing the same [`GlweDistribution`].
///
/// `add` and `sub` are always available; `mul` requires a relinearization
/// key and, even then, is only compiled in behind the `unstable-mul`
/// feature (see [`Evaluator::mul`]).
pub struct Evaluator<'d> {
    dist: &'d GlweDistribution,
    relin_key: Option<RelinKey>,
}

impl<'d> Evaluator<'d> {
    /// Builds an evaluator. `relin_key` is required for [`Evaluator::mul`]
    /// (when the `unstable-mul` feature is enabled); `add` and `sub` never
    /// need it.
    pub fn new(dist: &'d GlweDistribution, relin_key: Option<RelinKey>) -> Self {
        tracing::debug!(has_relin_key = relin_key.is_some(), "initializing evaluator");
        Self { dist, relin_key }
    }

    /// Coefficient-wise sum of two ciphertexts' masks and bodies.
    pub fn add(&self, lhs: &Cipher, rhs: &Cipher) -> Cipher {
        tracing::debug!("adding ciphertexts");
        let mask = lhs.sample().mask() + rhs.sample().mask();
        let body = lhs.sample().body() + rhs.sample().body();
        Cipher::new(GlweSample::new(mask, body))
    }

    /// Coefficient-wise difference of two ciphertexts' masks and bodies.
    pub fn sub(&self, lhs: &Cipher, rhs: &Cipher) -> Cipher {
        tracing::debug!("subtracting ciphertexts");
        let mask = lhs.sample().mask() - rhs.sample().mask();
        let body = lhs.sample().body() - rhs.sample().body();
        Cipher::new(GlweSample::new(mask, body))
    }

    #[cfg(feature = "unstable-mul")]
    fn compute_rank2_product(&self, lhs: &GlweSample, rhs: &GlweSample) -> Rank2Cipher {
        tracing::debug!("computing rank-2 product");
        let constant = lhs.body() * rhs.body();
        let linear = &(lhs.body() * rhs.mask()) + &(lhs.mask() * rhs.body());
        let quadratic = lhs.mask() * rhs.mask();
        Rank2Cipher::new(constant, linear, quadratic)
    }

    /// Multiplies two ciphertexts and relinearizes the result back to rank
    /// 1, using the evaluator's relinearization key.
    ///
    /// This reproduces the exact documented shape of the scheme's
    /// multiplication path, but that path is not proven to decrypt
    /// correctly (see `SPEC_FULL.md`); it is refused unless the
    /// `unstable-mul` feature is enabled, so that a caller who has not
    /// explicitly opted in never silently gets a wrong answer out of
    /// `mul`.
    #[cfg(feature = "unstable-mul")]
    pub fn mul(&self, lhs: &Cipher, rhs: &Cipher) -> Result<Cipher, VenumError> {
        let relin_key = self.relin_key.as_ref().ok_or(VenumError::MissingRelinKey)?;
        tracing::debug!("multiplying ciphertexts (unstable-mul)");
        let rank2 = self.compute_rank2_product(lhs.sample(), rhs.sample());
        rank2.relinearize(relin_key)
    }

    /// Without the `unstable-mul` feature, multiplication is refused
    /// outright rather than run: the path is not wired up, not merely
    /// unverified, per `SPEC_FULL.md`'s gating of this operation.
    #[cfg(not(feature = "unstable-mul"))]
    pub fn mul(&self, _lhs: &Cipher, _rhs: &Cipher) -> Result<Cipher, VenumError> {
        Err(VenumError::NotImplemented("homomorphic multiplication"))
    }

    /// The distribution this evaluator operates over.
    pub fn dist(&self) -> &GlweDistribution {
        self.dist
    }
}
