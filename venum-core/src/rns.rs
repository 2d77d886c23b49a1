//! Residue Number System (RNS) arithmetic and CRT reconstruction.
//!
//! An [`RnsBasis`] is an ordered sequence of pairwise-coprime moduli. An
//! [`Rns`] value pairs a basis with one residue per modulus, and supports
//! coefficient-wise addition, subtraction, and multiplication, plus
//! reconstruction of the unique represented integer via the Chinese
//! Remainder Theorem.

use itertools::izip;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::VenumError;


/// An ordered sequence of pairwise-coprime moduli, with their product cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RnsBasis {
    moduli: Vec<BigUint>,
    product: BigUint,
}

impl RnsBasis {
    /// Builds a new basis, failing with [`VenumError::NonCoprimeModuli`] if any
    /// pair of moduli shares a common factor.
    pub fn new(moduli: Vec<BigUint>) -> Result<Self, VenumError> {
        for i in 0..moduli.len() {
            for j in (i + 1)..moduli.len() {
                if moduli[i].gcd(&moduli[j]) != BigUint::one() {
                    return Err(VenumError::NonCoprimeModuli {
                        first: moduli[i].to_string(),
                        second: moduli[j].to_string(),
                    });
                }
            }
        }
        let product = moduli.iter().fold(BigUint::one(), |acc, m| acc * m);
        Ok(Self { moduli, product })
    }

    /// The moduli, in basis order.
    pub fn moduli(&self) -> &[BigUint] {
        &self.moduli
    }

    /// The number of moduli in the basis.
    pub fn len(&self) -> usize {
        self.moduli.len()
    }

    /// Whether the basis has no moduli.
    pub fn is_empty(&self) -> bool {
        self.moduli.is_empty()
    }

    /// `M = product of all moduli`, the size of the represented range `[0, M)`.
    pub fn modulus_product(&self) -> &BigUint {
        &self.product
    }

    /// Reduces `value` into RNS form: one residue per modulus, each in `[0,
    /// m_i)`. Negative values are reduced by mathematical modulo, not
    /// truncated division.
    pub fn to_rns(&self, value: &BigInt) -> Rns {
        let residues = self.moduli.iter().map(|m| mod_euclid(value, m)).collect();
        Rns {
            basis: self.clone(),
            residues,
        }
    }
}

/// Reduces a signed `value` into `[0, modulus)`.
fn mod_euclid(value: &BigInt, modulus: &BigUint) -> BigUint {
    let modulus_signed = BigInt::from(modulus.clone());
    let reduced = value.mod_floor(&modulus_signed);
    reduced
        .to_biguint()
        .expect("mod_floor against a positive modulus is always non-negative")
}

/// A basis paired with one residue per modulus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rns {
    basis: RnsBasis,
    residues: Vec<BigUint>,
}

impl Rns {
    /// Builds an `Rns` directly from residues, without reducing them against
    /// the basis moduli. `residues.len()` must equal `basis.len()`.
    pub fn from_residues(basis: RnsBasis, residues: Vec<BigUint>) -> Result<Self, VenumError> {
        if residues.len() != basis.len() {
            return Err(VenumError::DomainError(format!(
                "expected {} residues, got {}",
                basis.len(),
                residues.len()
            )));
        }
        Ok(Self { basis, residues })
    }

    /// The basis this value is represented in.
    pub fn basis(&self) -> &RnsBasis {
        &self.basis
    }

    /// The residues, in basis order.
    pub fn residues(&self) -> &[BigUint] {
        &self.residues
    }

    fn coeffwise_op(
        &self,
        other: &Rns,
        f: impl Fn(&BigUint, &BigUint, &BigUint) -> BigUint,
    ) -> Result<Rns, VenumError> {
        if self.basis != other.basis {
            return Err(VenumError::BasisMismatch);
        }
        let residues = izip!(&self.residues, &other.residues, &self.basis.moduli)
            .map(|(a, b, m)| f(a, b, m))
            .collect();
        Ok(Rns {
            basis: self.basis.clone(),
            residues,
        })
    }

    /// Coefficient-wise addition modulo each basis modulus.
    pub fn add(&self, other: &Rns) -> Result<Rns, VenumError> {
        self.coeffwise_op(other, |a, b, m| (a + b) % m)
    }

    /// Coefficient-wise subtraction modulo each basis modulus.
    pub fn sub(&self, other: &Rns) -> Result<Rns, VenumError> {
        self.coeffwise_op(other, |a, b, m| (a + m - (b % m)) % m)
    }

    /// Coefficient-wise multiplication modulo each basis modulus.
    pub fn mul(&self, other: &Rns) -> Result<Rns, VenumError> {
        self.coeffwise_op(other, |a, b, m| (a * b) % m)
    }

    /// Reconstructs the unique integer in `[0, M)` represented by these
    /// residues, via the Chinese Remainder Theorem:
    /// `sum_i(a_i * M_i * y_i) mod M`, where `M_i = M / m_i` and `y_i = M_i^-1 mod m_i`.
    pub fn to_int(&self) -> BigUint {
        let m = self.basis.modulus_product();
        let mut total = BigUint::zero();
        for (mi, ai) in self.basis.moduli.iter().zip(&self.residues) {
            let big_mi = m / mi;
            let inv = mod_inverse(&big_mi, mi);
            total += ai * &big_mi * inv;
        }
        total % m
    }
}

/// Returns `a^-1 mod m` via the extended Euclidean algorithm. `a` and `m`
/// must be coprime, which [`RnsBasis::new`] guarantees for the values this
/// is called with.
fn mod_inverse(a: &BigUint, m: &BigUint) -> BigUint {
    let (mut old_r, mut r) = (BigInt::from(a.clone()), BigInt::from(m.clone()));
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let new_r = &old_r - &quotient * &r;
        old_r = r;
        r = new_r;
        let new_s = &old_s - &quotient * &s;
        old_s = s;
        s = new_s;
    }

    let m_signed = BigInt::from(m.clone());
    mod_euclid(&old_s, &m_signed.to_biguint().unwrap())
}
