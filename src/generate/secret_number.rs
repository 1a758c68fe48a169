//!
//! Generate a per-message secret number
//!

use crate::Components;
use num_bigint::{BigUint, ModInverse, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Generate a per-message secret number k uniform in [1, q-1]
///
/// Since q is prime every such k is invertible mod q; the inverse is computed
/// here so the caller never handles a k without one.
///
/// # Returns
///
/// Secret number k and its modular multiplicative inverse with q
#[inline]
pub(crate) fn secret_number<R>(rng: &mut R, components: &Components) -> Option<(BigUint, BigUint)>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let q = components.q();

    // Attempt to find a fitting secret number
    // Give up after 4096 tries
    for _ in 0..4096 {
        let k = rng.gen_biguint_range(&BigUint::one(), q);

        if let Some(inv_k) = (&k).mod_inverse(q).and_then(|inv| inv.to_biguint()) {
            return Some((k, inv_k));
        }
    }

    None
}
