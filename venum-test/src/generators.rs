//! Reusable random-sampling helpers for exercising RNS arithmetic and the
//! GLWE scheme's algebraic invariants over small, fast parameter sets.
//!
//! Mirrors `eyelid-match-ops/src/primitives/poly/test/gen.rs`'s pattern of
//! a handful of `rand`-backed generator functions driven by the caller's
//! own RNG, rather than a property-testing framework's generate-and-shrink
//! loop.

use num_bigint::BigUint;
use rand::Rng;
use venum_core::EncryptionParameters;

/// Small odd primes; any subset is pairwise coprime, so picking a random
/// subset is a cheap way to get a valid `RnsBasis`.
const SMALL_PRIMES: [u64; 8] = [3, 5, 7, 11, 13, 17, 19, 23];

/// Returns a random subset of [`SMALL_PRIMES`] of length `2..=8`, suitable
/// as an `RnsBasis` without risking a coprimality failure.
pub fn rand_coprime_moduli<R: Rng>(rng: &mut R) -> Vec<u64> {
    let len = rng.gen_range(2..=SMALL_PRIMES.len());
    let mut pool = SMALL_PRIMES.to_vec();
    let mut chosen = Vec::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0..pool.len());
        chosen.push(pool.remove(idx));
    }
    chosen
}

/// Returns a non-negative integer below `1_000_000`, comfortably smaller
/// than the product of any subset of [`SMALL_PRIMES`].
pub fn rand_small_nonnegative_int<R: Rng>(rng: &mut R) -> u64 {
    rng.gen_range(0..1_000_000)
}

/// Returns a small GLWE parameter set satisfying `p0 * p1 < q` by
/// construction, with `N` fixed to `4` so tests stay fast. `p0` and `p1`
/// are drawn coprime, since they also serve as the CRT packer's basis
/// inside `GlweDistribution`.
pub fn rand_small_encryption_parameters<R: Rng>(rng: &mut R) -> EncryptionParameters {
    const NOISE_MODULI: [u32; 5] = [2, 3, 5, 7, 11];
    loop {
        let p0 = rng.gen_range(4u32..=64);
        let p1 = NOISE_MODULI[rng.gen_range(0..NOISE_MODULI.len())];
        if p0 % p1 == 0 {
            continue;
        }
        let min_q = p0 as u64 * p1 as u64 + 1;
        let q = rng.gen_range(min_q..min_q + 10_000);
        return EncryptionParameters::new(
            4,
            BigUint::from(q),
            BigUint::from(p0),
            BigUint::from(p1),
            None,
        )
        .expect("q was chosen to exceed p0 * p1");
    }
}

/// Returns a message vector of `len` coefficients, each below `modulus`.
pub fn rand_message_below<R: Rng>(rng: &mut R, len: usize, modulus: u64) -> Vec<BigUint> {
    (0..len).map(|_| BigUint::from(rng.gen_range(0..modulus))).collect()
}
