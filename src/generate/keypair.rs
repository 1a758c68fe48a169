//!
//! Generate an ElGamal keypair
//!

use crate::{generate, two, Components, SigningKey, VerifyingKey};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Generate a new keypair
#[inline]
pub(crate) fn keypair<R>(rng: &mut R, components: Components) -> SigningKey
where
    R: CryptoRng + RngCore + ?Sized,
{
    let (x, y) = loop {
        // private component uniform in [2, p-2]
        let x = rng.gen_biguint_range(&two(), &(components.p() - BigUint::one()));
        let y = generate::public_component(&components, &x);

        // x a multiple of q collapses y to 1 (very unlikely but possible)
        if !y.is_one() {
            break (x, y);
        }
    };

    VerifyingKey::from_components(components, y)
        .and_then(|verifying_key| SigningKey::from_components(verifying_key, x))
        .expect("[Bug] Newly generated keypair considered invalid")
}
