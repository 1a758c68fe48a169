//!
//! Module containing the definition of the Signature container
//!

use num_bigint::BigUint;
use num_traits::Zero;

/// Container of the ElGamal signature
#[derive(Clone)]
#[must_use]
pub struct Signature {
    /// Signature part r
    r: BigUint,

    /// Signature part s
    s: BigUint,
}

opaque_debug::implement!(Signature);

impl Signature {
    /// Create a new Signature container from its components
    ///
    /// These values are not getting verified for validity; out-of-range parts
    /// make [`VerifyingKey::verify_prehashed`](crate::VerifyingKey::verify_prehashed)
    /// return `false`
    pub const fn from_components(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Signature part r
    #[must_use]
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Signature part s
    #[must_use]
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Whether both parts lie inside the ranges (0, p) and [0, q)
    #[must_use]
    pub(crate) fn r_s_in_range(&self, p: &BigUint, q: &BigUint) -> bool {
        !self.r.is_zero() && self.r < *p && self.s < *q
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.r().eq(other.r()) && self.s().eq(other.s())
    }
}

impl PartialOrd for Signature {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        (self.r(), self.s()).partial_cmp(&(other.r(), other.s()))
    }
}
