//!
//! Module containing the definition of the common components container
//!

use crate::{error::Error, generate, size::ParamSize, two, GenerationOptions};
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// The common components of an ElGamal keypair
///
/// (the safe prime p, subgroup order q and generator g, with p = 2q + 1)
#[derive(Clone, PartialEq, PartialOrd)]
#[must_use]
pub struct Components {
    /// Prime modulus p
    p: BigUint,

    /// Subgroup order q
    q: BigUint,

    /// Generator g of the order-q subgroup
    g: BigUint,
}

opaque_debug::implement!(Components);

impl Components {
    /// Construct the common components container from its inner values
    /// (p, q and g)
    ///
    /// The values are checked against the domain parameter invariants:
    /// p = 2q + 1, 1 < g < p and g^q ≡ 1 (mod p). Primality of p and q is
    /// the caller's responsibility when importing externally produced
    /// parameters; [`Components::generate`] guarantees it.
    pub fn from_components(p: BigUint, q: BigUint, g: BigUint) -> Result<Self, Error> {
        let components = Self { p, q, g };

        if !components.is_valid() {
            return Err(Error::InvalidParameters);
        }

        Ok(components)
    }

    /// Generate a new set of common components with the default
    /// [`GenerationOptions`]
    pub fn generate<R>(rng: &mut R, size: ParamSize) -> Result<Self, Error>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        Self::generate_with(rng, size, &GenerationOptions::default())
    }

    /// Generate a new set of common components with explicit generation
    /// options
    ///
    /// Fails with [`Error::GenerationTimeout`] if the safe prime or generator
    /// search exhausts the configured iteration cap.
    pub fn generate_with<R>(
        rng: &mut R,
        size: ParamSize,
        options: &GenerationOptions,
    ) -> Result<Self, Error>
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        let (p, q, g) = generate::common_components(rng, size, options)?;
        Ok(Self { p, q, g })
    }

    /// Prime modulus p
    #[must_use]
    pub const fn p(&self) -> &BigUint {
        &self.p
    }

    /// Subgroup order q
    #[must_use]
    pub const fn q(&self) -> &BigUint {
        &self.q
    }

    /// Generator g
    #[must_use]
    pub const fn g(&self) -> &BigUint {
        &self.g
    }

    /// Check whether the components satisfy the domain parameter invariants
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.p == two() * &self.q + BigUint::one()
            && self.g > BigUint::one()
            && self.g < self.p
            && self.g.modpow(&self.q, &self.p).is_one()
    }
}
