//!
//! Selection of a generator of the order-q subgroup of Z_p^*
//!

use crate::{
    error::{Error, Result},
    generate::GenerationOptions,
    two,
};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Find a generator g of the subgroup of order q in Z_p^*
///
/// Samples h uniformly from [2, p-2] and takes g = h^((p-1)/q) mod p; for a
/// safe prime the cofactor (p-1)/q is exactly 2. The rare h whose power
/// collapses to 1 is rejected and resampled.
pub(crate) fn subgroup_generator<R>(
    rng: &mut R,
    p: &BigUint,
    q: &BigUint,
    options: &GenerationOptions,
) -> Result<BigUint>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let cofactor = (p - BigUint::one()) / q;

    for _ in 0..options.iteration_cap {
        let h = rng.gen_biguint_range(&two(), &(p - BigUint::one()));
        let g = h.modpow(&cofactor, p);

        if g.is_one() {
            continue;
        }

        // order-q post-condition; failing it means the parameters or the
        // arithmetic are broken, not that the candidate was unlucky
        if !g.modpow(q, p).is_one() {
            return Err(Error::InvariantViolation);
        }

        return Ok(g);
    }

    Err(Error::GenerationTimeout)
}
