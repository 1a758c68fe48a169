use crate::error::{Error, Result};

/// Subgroup order size (bit-length of the prime q; p = 2q + 1 is one bit
/// larger)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParamSize {
    /// Bit size of q
    pub(crate) n: u32,
}

impl ParamSize {
    /// Smallest accepted subgroup size in bits
    ///
    /// Anything near this bound is only useful for tests; real deployments
    /// want at least 160 bits
    pub const MIN_BITS: u32 = 16;

    /// ElGamal parameter size constant: 160-bit subgroup order
    #[deprecated(
        note = "This size constant has a security strength of under 112 bits per SP 800-57 Part 1 Rev. 5"
    )]
    pub const EG_160: Self = Self { n: 160 };

    /// ElGamal parameter size constant: 224-bit subgroup order
    pub const EG_224: Self = Self { n: 224 };

    /// ElGamal parameter size constant: 256-bit subgroup order
    pub const EG_256: Self = Self { n: 256 };

    /// Select an arbitrary subgroup size, rejecting anything below
    /// [`ParamSize::MIN_BITS`]
    pub fn new(n: u32) -> Result<Self> {
        if n < Self::MIN_BITS {
            return Err(Error::Configuration);
        }

        Ok(Self { n })
    }

    /// Bit size of q
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.n
    }
}
