//!
//! Module containing the definition of the private key container
//!

use crate::{error::Error, generate, two, Components, Signature, VerifyingKey};
use digest::Digest;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use signature::{rand_core::CryptoRngCore, RandomizedDigestSigner};
use zeroize::Zeroizing;

/// ElGamal private key
///
/// Signing draws a fresh secret number per message, so every API that
/// produces a signature takes an RNG.
#[derive(Clone, PartialEq)]
#[must_use]
pub struct SigningKey {
    /// Public key
    verifying_key: VerifyingKey,

    /// Private component x
    x: Zeroizing<BigUint>,
}

opaque_debug::implement!(SigningKey);

impl SigningKey {
    /// Construct a new private key from the public key and private component
    ///
    /// Fails with [`Error::InvalidParameters`] unless 2 ≤ x ≤ p-2 and the
    /// public component matches g^x mod p
    pub fn from_components(verifying_key: VerifyingKey, x: BigUint) -> Result<Self, Error> {
        let components = verifying_key.components();
        let p = components.p();

        if x < two() || x > p - two() {
            return Err(Error::InvalidParameters);
        }

        if *verifying_key.y() != components.g().modpow(&x, p) {
            return Err(Error::InvalidParameters);
        }

        Ok(Self {
            verifying_key,
            x: Zeroizing::new(x),
        })
    }

    /// Generate a new ElGamal keypair
    #[inline]
    pub fn generate<R>(rng: &mut R, components: Components) -> SigningKey
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        generate::keypair(rng, components)
    }

    /// ElGamal public key
    pub const fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// ElGamal private component
    ///
    /// If you decide to clone this value, please consider using
    /// [`Zeroize::zeroize`](::zeroize::Zeroize::zeroize()) to zero out the
    /// memory after you're done using the clone
    #[must_use]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Sign a message digest already reduced to an integer
    ///
    /// The digest is reduced mod q before entering the signing equation; the
    /// verifier applies the same convention
    pub fn sign_prehashed<R>(&self, rng: &mut R, digest: &BigUint) -> Result<Signature, Error>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        let components = self.verifying_key().components();
        let (p, q, g) = (components.p(), components.q(), components.g());
        let x = self.x();

        let z = digest % q;

        // s = 0 yields a degenerate signature and forces a fresh k
        for _ in 0..4096 {
            let (k, inv_k) = generate::secret_number(rng, components).ok_or(Error::Signing)?;

            let r = g.modpow(&k, p);
            let xr = (x * (&r % q)) % q;
            let s = (&inv_k * ((&z + q - &xr) % q)) % q;

            if s.is_zero() {
                continue;
            }

            return Ok(Signature::from_components(r, s));
        }

        Err(Error::Signing)
    }
}

impl<D> RandomizedDigestSigner<D, Signature> for SigningKey
where
    D: Digest,
{
    /// Sign the digest, interpreting its output as a big-endian integer
    fn try_sign_digest_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        digest: D,
    ) -> Result<Signature, signature::Error> {
        let z = BigUint::from_bytes_be(&digest.finalize());

        self.sign_prehashed(rng, &z)
            .map_err(|_| signature::Error::new())
    }
}
