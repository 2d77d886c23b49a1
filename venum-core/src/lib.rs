//! GLWE-based homomorphic encryption with CRT plaintext/noise packing.
//!
//! A client builds [`glwe::EncryptionParameters`], derives a
//! [`glwe::GlweDistribution`] from them, generates a [`keys::SecretKey`] /
//! [`keys::PublicKey`] pair (and, for homomorphic multiplication, a
//! [`keys::RelinKey`]), encrypts integer messages with an
//! [`encryption::Encryptor`], and performs homomorphic arithmetic with an
//! [`evaluation::Evaluator`].
//!
//! The scheme packs a plaintext coefficient and a noise coefficient into a
//! single ring element via the Chinese Remainder Theorem ([`crt`]), built
//! on top of exact modular polynomial arithmetic in `R_q = Z_q[x]/(x^N+1)`
//! ([`ring`]) and a Residue Number System ([`rns`]).
//!
//! Homomorphic multiplication ([`evaluation::Evaluator::mul`]) reproduces
//! the documented shape of a rank-2 product and relinearization, but is
//! not proven to decrypt correctly; it is gated behind the `unstable-mul`
//! feature and returns [`error::VenumError::NotImplemented`] otherwise.

#[macro_use]
extern crate static_assertions;

pub mod crt;
pub mod encoding;
pub mod encryption;
pub mod error;
pub mod evaluation;
pub mod glwe;
pub mod keys;
pub mod numeric;
pub mod ring;
pub mod rns;

pub use encoding::{Encoder, PolynomialEncoder};
pub use encryption::{Cipher, Encryptor, Rank2Cipher};
pub use error::VenumError;
pub use evaluation::Evaluator;
pub use glwe::{EncryptionParameters, GlweDistribution, GlweSample};
pub use keys::{gen_key_pair, PublicKey, RelinKey, SecretKey};
