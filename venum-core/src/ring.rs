//! The polynomial quotient ring `R_q = Z_q[x] / (x^N + 1)`.
//!
//! [`PolyRing`] is a lightweight descriptor (modulus `q`, degree `N`) that
//! acts as a factory for [`RingElement`]s. Arithmetic lives on `RingElement`
//! itself via the standard operator traits, with cyclotomic reduction
//! (`x^N ≡ -1`) folded into multiplication.

use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

#[cfg(test)]
mod test;

/// The degree `N` of the cyclotomic polynomial `x^N + 1` a ring reduces by.
/// `N` is conventionally a power of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolyModulus {
    degree: usize,
}

impl PolyModulus {
    /// Builds a new polynomial modulus of the given degree.
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    /// The degree `N`.
    pub fn degree(&self) -> usize {
        self.degree
    }
}

/// A descriptor for `Z_q[x] / (x^N + 1)`: the coefficient modulus `q` and the
/// cyclotomic degree `N`. Produces [`RingElement`]s bound to this ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolyRing {
    modulus: BigUint,
    poly_modulus: PolyModulus,
}

impl PolyRing {
    /// Builds a new ring descriptor.
    pub fn new(modulus: BigUint, poly_modulus: PolyModulus) -> Self {
        Self {
            modulus,
            poly_modulus,
        }
    }

    /// The coefficient modulus `q`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The cyclotomic degree `N`.
    pub fn degree(&self) -> usize {
        self.poly_modulus.degree()
    }

    /// The zero polynomial in this ring.
    pub fn zero(&self) -> RingElement {
        RingElement {
            modulus: self.modulus.clone(),
            coeffs: vec![BigUint::zero(); self.degree()],
        }
    }

    /// Builds a ring element from exactly `N` coefficients, each reduced
    /// modulo `q`. Coefficients beyond the degree are not accepted; callers
    /// that have fewer than `N` coefficients should pad with zero first.
    pub fn from_coeffs(&self, coeffs: Vec<BigUint>) -> RingElement {
        debug_assert_eq!(
            coeffs.len(),
            self.degree(),
            "coefficient vector must match ring degree"
        );
        let coeffs = coeffs.into_iter().map(|c| c % &self.modulus).collect();
        RingElement {
            modulus: self.modulus.clone(),
            coeffs,
        }
    }

    /// Samples a ring element with coefficients drawn uniformly from `[0,
    /// bound)`, or from `[0, q)` when `bound` is `None`.
    pub fn sample_uniform(&self, bound: Option<&BigUint>, rng: &mut dyn RngCore) -> RingElement {
        let bound = bound.unwrap_or(&self.modulus);
        let coeffs = (0..self.degree())
            .map(|_| sample_below(bound, rng))
            .collect();
        RingElement {
            modulus: self.modulus.clone(),
            coeffs,
        }
    }
}

/// Draws a uniform value in `[0, bound)` via rejection sampling against the
/// smallest byte-aligned range covering `bound`.
fn sample_below(bound: &BigUint, rng: &mut dyn RngCore) -> BigUint {
    if bound.is_zero() {
        return BigUint::zero();
    }
    let byte_len = (bound.bits() as usize).div_ceil(8).max(1);
    loop {
        let mut bytes = vec![0u8; byte_len];
        rng.fill_bytes(&mut bytes);
        let candidate = BigUint::from_bytes_le(&bytes);
        if &candidate < bound {
            return candidate;
        }
    }
}

/// An element of `Z_q[x] / (x^N + 1)`: `N` coefficients, each in `[0, q)`,
/// stored least-significant-coefficient first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingElement {
    modulus: BigUint,
    coeffs: Vec<BigUint>,
}

impl RingElement {
    /// The coefficient modulus this element is reduced against.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The coefficients, least-significant first.
    pub fn coeffs(&self) -> &[BigUint] {
        &self.coeffs
    }

    /// Mutable access to the coefficients.
    pub fn coeffs_mut(&mut self) -> &mut [BigUint] {
        &mut self.coeffs
    }

    /// The cyclotomic degree `N`.
    pub fn degree(&self) -> usize {
        self.coeffs.len()
    }

    /// Reinterprets this element's coefficients under `new_modulus`, without
    /// reducing them. Used to move a value computed in one ring (for
    /// example, the CRT packing ring `Z_{p0*p1}`) into a larger ring (the
    /// ciphertext ring `R_q`) ahead of encryption, where it is `q`-reduced
    /// lazily the first time it participates in ring arithmetic.
    pub fn lift(&self, new_modulus: BigUint) -> RingElement {
        RingElement {
            modulus: new_modulus,
            coeffs: self.coeffs.clone(),
        }
    }

    /// Reduces every coefficient modulo this element's modulus. Idempotent;
    /// useful after [`RingElement::lift`] once arithmetic needs canonical
    /// representatives.
    pub fn reduce(&self) -> RingElement {
        let coeffs = self.coeffs.iter().map(|c| c % &self.modulus).collect();
        RingElement {
            modulus: self.modulus.clone(),
            coeffs,
        }
    }

    /// Multiplies every coefficient by a scalar, modulo this element's
    /// modulus. Used by relinearization key generation to scale `s^2` by
    /// successive powers of the decomposition base.
    pub fn scale(&self, scalar: &BigUint) -> RingElement {
        let coeffs = self.coeffs.iter().map(|c| (c * scalar) % &self.modulus).collect();
        RingElement {
            modulus: self.modulus.clone(),
            coeffs,
        }
    }
}

impl Add for &RingElement {
    type Output = RingElement;

    fn add(self, rhs: &RingElement) -> RingElement {
        debug_assert_eq!(self.modulus, rhs.modulus, "ring elements from different rings");
        debug_assert_eq!(self.coeffs.len(), rhs.coeffs.len(), "ring elements of different degree");
        let coeffs = self
            .coeffs
            .iter()
            .zip(&rhs.coeffs)
            .map(|(a, b)| (a + b) % &self.modulus)
            .collect();
        RingElement {
            modulus: self.modulus.clone(),
            coeffs,
        }
    }
}

impl Sub for &RingElement {
    type Output = RingElement;

    fn sub(self, rhs: &RingElement) -> RingElement {
        debug_assert_eq!(self.modulus, rhs.modulus, "ring elements from different rings");
        debug_assert_eq!(self.coeffs.len(), rhs.coeffs.len(), "ring elements of different degree");
        let coeffs = self
            .coeffs
            .iter()
            .zip(&rhs.coeffs)
            .map(|(a, b)| (&self.modulus + a - (b % &self.modulus)) % &self.modulus)
            .collect();
        RingElement {
            modulus: self.modulus.clone(),
            coeffs,
        }
    }
}

impl Neg for &RingElement {
    type Output = RingElement;

    fn neg(self) -> RingElement {
        let coeffs = self
            .coeffs
            .iter()
            .map(|a| (&self.modulus - (a % &self.modulus)) % &self.modulus)
            .collect();
        RingElement {
            modulus: self.modulus.clone(),
            coeffs,
        }
    }
}

impl Mul for &RingElement {
    type Output = RingElement;

    /// Schoolbook polynomial multiplication, folded modulo `x^N + 1`: a term
    /// landing at exponent `i + j >= N` wraps to exponent `i + j - N` with
    /// its sign flipped, since `x^N ≡ -1`.
    fn mul(self, rhs: &RingElement) -> RingElement {
        debug_assert_eq!(self.modulus, rhs.modulus, "ring elements from different rings");
        debug_assert_eq!(self.coeffs.len(), rhs.coeffs.len(), "ring elements of different degree");
        let n = self.coeffs.len();
        let modulus = &self.modulus;
        let mut acc = vec![BigUint::zero(); n];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                if b.is_zero() {
                    continue;
                }
                let term = (a * b) % modulus;
                let raw_index = i + j;
                if raw_index < n {
                    acc[raw_index] = (&acc[raw_index] + &term) % modulus;
                } else {
                    let folded = raw_index - n;
                    acc[folded] = (modulus + &acc[folded] - term) % modulus;
                }
            }
        }

        RingElement {
            modulus: modulus.clone(),
            coeffs: acc,
        }
    }
}
