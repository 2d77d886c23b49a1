//! Base-`b` digit extraction and radix decomposition of ring element coefficients.
//!
//! Used by relinearization (`crate::evaluation`) to split the quadratic term
//! of a rank-2 product into digit-sized components that pair up with the
//! relinearization key's auxiliary samples.

use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

use crate::error::VenumError;
use crate::ring::{PolyRing, RingElement};

#[cfg(test)]
mod test;

/// Returns the `index`-th base-`radix` digit of `number`, counting from the
/// least-significant digit (`index == 0`).
///
/// Fails with [`VenumError::DomainError`] when `number` is negative, `radix`
/// is less than 2, or `index` is negative.
pub fn nth_digit(number: &BigInt, radix: u64, index: i64) -> Result<BigUint, VenumError> {
    if number.is_negative() {
        return Err(VenumError::DomainError("number must be non-negative".into()));
    }
    if radix < 2 {
        return Err(VenumError::DomainError("radix must be at least 2".into()));
    }
    if index < 0 {
        return Err(VenumError::DomainError("digit index must be non-negative".into()));
    }

    let radix = BigUint::from(radix);
    let mut n = number
        .to_biguint()
        .expect("non-negative BigInt always has a BigUint representation");
    for _ in 0..index {
        n /= &radix;
    }
    Ok(n % &radix)
}

/// Decomposes `element` into `num_components` polynomials `P_0, ..., P_{num_components - 1}`
/// such that the `j`-th coefficient of `P_i` is the `i`-th base-`radix` digit of
/// the `j`-th coefficient of `element`. The digit index `i` matches the
/// exponent convention used by [`crate::keys::RelinKey`]'s auxiliary keys:
/// `P_i` corresponds to `radix^i`.
///
/// Each `P_i` is constructed in `ring` (the cipher ring, at the point of use
/// during relinearization).
pub fn radix_decompose_poly(
    element: &RingElement,
    radix: u64,
    num_components: usize,
    ring: &PolyRing,
) -> Result<Vec<RingElement>, VenumError> {
    let mut components = Vec::with_capacity(num_components);
    for i in 0..num_components {
        let coeffs = element
            .coeffs()
            .iter()
            .map(|c| nth_digit(&BigInt::from(c.clone()), radix, i as i64))
            .collect::<Result<Vec<_>, _>>()?;
        components.push(ring.from_coeffs(coeffs));
    }
    Ok(components)
}
