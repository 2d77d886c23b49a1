//! The error taxonomy for the venum GLWE scheme.
//!
//! Every fallible public operation returns one of these variants so that
//! callers can discriminate failure modes instead of matching on strings.
//! Errors are never retried or recovered internally; they propagate to the
//! call site where they arose.

use thiserror::Error;

/// All errors that can occur while constructing parameters, running RNS/CRT
/// arithmetic, or performing GLWE key generation, encryption, decryption, or
/// homomorphic evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VenumError {
    /// `EncryptionParameters` were constructed with `plaintext_modulus *
    /// noise_modulus >= ciphertext_modulus`.
    #[error("invalid parameters: plaintext_modulus * noise_modulus must be < ciphertext_modulus")]
    InvalidParameters,

    /// An `RnsBasis` was constructed from moduli that are not pairwise coprime.
    #[error("moduli {first} and {second} are not coprime")]
    NonCoprimeModuli {
        /// The first of the offending pair of moduli.
        first: String,
        /// The second of the offending pair of moduli.
        second: String,
    },

    /// A CRT packer was constructed from a basis whose length is not exactly two.
    #[error("CRT packer requires a basis of length 2, got {actual}")]
    BasisArity {
        /// The required basis length (always 2).
        expected: usize,
        /// The basis length actually supplied.
        actual: usize,
    },

    /// Arithmetic was attempted between two `Rns` values with different bases.
    #[error("RNS arithmetic attempted between incompatible bases")]
    BasisMismatch,

    /// A plaintext encoder was given more coefficients than the ring dimension.
    #[error("message has {actual} coefficients, which exceeds the ring dimension {max}")]
    MessageTooLong {
        /// The ring dimension (maximum message length).
        max: usize,
        /// The number of coefficients actually supplied.
        actual: usize,
    },

    /// An argument to `nth_digit` or `radix_decompose_poly` was out of domain:
    /// a negative number, a radix below 2, or a negative digit index.
    #[error("domain error: {0}")]
    DomainError(String),

    /// `Evaluator::mul` was called without a relinearization key.
    #[error("homomorphic multiplication requires a relinearization key")]
    MissingRelinKey,

    /// A path that is intentionally not wired up yet, surfaced instead of
    /// silently returning a wrong answer.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}
