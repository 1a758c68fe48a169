//!
//! Error types shared by the parameter generation and key handling paths
//!

/// Result type with the crate-local [`Error`]
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
///
/// A failed signature check is deliberately absent here: verification reports
/// it through its return value, never through an error
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A configuration value is outside the supported range, e.g. a subgroup
    /// size below [`ParamSize::MIN_BITS`](crate::ParamSize::MIN_BITS) or a
    /// zero Miller-Rabin round count
    Configuration,

    /// A bounded search (safe prime or subgroup generator) exhausted its
    /// iteration cap; retry with a larger cap or a different bit-length
    GenerationTimeout,

    /// Domain parameters or key material failed an invariant check at a
    /// component boundary
    InvalidParameters,

    /// A post-condition check failed, indicating an arithmetic bug rather
    /// than bad input
    InvariantViolation,

    /// Signing could not produce a non-degenerate signature
    Signing,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Configuration => write!(f, "elgamal: configuration value out of range"),
            Error::GenerationTimeout => write!(f, "elgamal: generation iteration cap exceeded"),
            Error::InvalidParameters => write!(f, "elgamal: invalid domain parameters or key"),
            Error::InvariantViolation => write!(f, "elgamal: arithmetic post-condition violated"),
            Error::Signing => write!(f, "elgamal: failed to produce a signature"),
        }
    }
}
