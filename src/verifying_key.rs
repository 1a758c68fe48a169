//!
//! Module containing the definition of the public key container
//!

use crate::{error::Error, two, Components, Signature};
use digest::Digest;
use num_bigint::BigUint;
use num_traits::One;
use signature::DigestVerifier;

/// ElGamal public key
#[derive(Clone, PartialEq, PartialOrd)]
#[must_use]
pub struct VerifyingKey {
    /// common components
    components: Components,

    /// Public component y
    y: BigUint,
}

opaque_debug::implement!(VerifyingKey);

impl VerifyingKey {
    /// Construct a new public key from the common components and the public
    /// component
    ///
    /// Fails with [`Error::InvalidParameters`] unless 2 ≤ y < p and y lies in
    /// the order-q subgroup (y^q ≡ 1 mod p)
    pub fn from_components(components: Components, y: BigUint) -> Result<Self, Error> {
        if y < two() || y >= *components.p() {
            return Err(Error::InvalidParameters);
        }

        // Taken from the parameter validation from bouncy castle
        if !y.modpow(components.q(), components.p()).is_one() {
            return Err(Error::InvalidParameters);
        }

        Ok(Self { components, y })
    }

    /// ElGamal common components
    pub const fn components(&self) -> &Components {
        &self.components
    }

    /// ElGamal public component
    #[must_use]
    pub const fn y(&self) -> &BigUint {
        &self.y
    }

    /// Verify a signature against a message digest already reduced to an
    /// integer
    ///
    /// The digest is reduced mod q, matching the signer's convention. A
    /// malformed signature (r outside (0, p) or s outside [0, q)) is a
    /// normal negative outcome and returns `false`, never an error. Pure
    /// function: identical inputs always produce identical results.
    #[must_use]
    pub fn verify_prehashed(&self, digest: &BigUint, signature: &Signature) -> bool {
        let components = self.components();
        let (p, q, g) = (components.p(), components.q(), components.g());
        let (r, s) = (signature.r(), signature.s());
        let y = self.y();

        if !signature.r_s_in_range(p, q) {
            return false;
        }

        let z = digest % q;

        let left = (y.modpow(r, p) * r.modpow(s, p)) % p;
        let right = g.modpow(&z, p);

        left == right
    }
}

impl<D> DigestVerifier<D, Signature> for VerifyingKey
where
    D: Digest,
{
    /// Verify the digest, interpreting its output as a big-endian integer
    fn verify_digest(
        &self,
        digest: D,
        signature: &Signature,
    ) -> Result<(), signature::Error> {
        let z = BigUint::from_bytes_be(&digest.finalize());

        if self.verify_prehashed(&z, signature) {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}
