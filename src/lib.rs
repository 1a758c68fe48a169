#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![doc = include_str!("../README.md")]

//!
//! # Examples
//!
//! Generate domain parameters and a keypair, then sign and verify a message
//! digest:
//!
//! ```
//! use elgamal_signature::{Components, ParamSize, SigningKey};
//! use sha2::{Digest, Sha256};
//! use signature::{DigestVerifier, RandomizedDigestSigner};
//!
//! # fn main() -> elgamal_signature::Result<()> {
//! let mut rng = rand::thread_rng();
//!
//! // A 64-bit subgroup keeps this example fast; real keys should use
//! // `ParamSize::EG_256` or larger.
//! let components = Components::generate(&mut rng, ParamSize::new(64)?)?;
//! let signing_key = SigningKey::generate(&mut rng, components);
//! let verifying_key = signing_key.verifying_key();
//!
//! let signature = signing_key
//!     .sign_digest_with_rng(&mut rng, Sha256::new_with_prefix(b"SIGN THESE BYTES"));
//!
//! assert!(verifying_key
//!     .verify_digest(Sha256::new_with_prefix(b"SIGN THESE BYTES"), &signature)
//!     .is_ok());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "std")]
extern crate std;

pub use crate::{
    components::Components,
    error::{Error, Result},
    generate::GenerationOptions,
    sig::Signature,
    signing_key::SigningKey,
    size::ParamSize,
    verifying_key::VerifyingKey,
};

pub use num_bigint::BigUint;
pub use signature;

mod components;
mod error;
mod generate;
pub mod primality;
mod sig;
mod signing_key;
mod size;
mod verifying_key;

/// Returns a `BigUint` with the value 2
#[inline]
fn two() -> BigUint {
    BigUint::from(2_u8)
}
