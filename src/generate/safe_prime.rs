//!
//! Search for a Sophie-Germain pair (q, p = 2q + 1)
//!

use crate::{
    error::{Error, Result},
    generate::GenerationOptions,
    primality::is_probable_prime,
};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Generate a safe prime p = 2q + 1 with q of exactly `bits` bits
///
/// # Returns
///
/// The pair `(p, q)`, both probable primes at the configured round count
pub(crate) fn safe_prime<R>(
    rng: &mut R,
    bits: u32,
    options: &GenerationOptions,
) -> Result<(BigUint, BigUint)>
where
    R: CryptoRng + RngCore + ?Sized,
{
    for _ in 0..options.iteration_cap {
        // top bit fixes the bit-length, low bit forces odd
        let q = rng.gen_biguint(bits as usize)
            | (BigUint::one() << ((bits - 1) as usize))
            | BigUint::one();

        if !is_probable_prime(&q, options.rounds, rng) {
            continue;
        }

        let p = (&q << 1) + BigUint::one();
        if is_probable_prime(&p, options.rounds, rng) {
            return Ok((p, q));
        }
    }

    Err(Error::GenerationTimeout)
}
