use crate::{
    error::{Error, Result},
    size::ParamSize,
};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

mod generator;
mod keypair;
mod safe_prime;
mod secret_number;

pub(crate) use self::{
    generator::subgroup_generator, keypair::keypair, safe_prime::safe_prime,
    secret_number::secret_number,
};

/// Tuning knobs for the probabilistic searches in parameter generation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationOptions {
    /// Miller-Rabin round count used on every prime candidate
    pub rounds: usize,

    /// Upper bound on candidates tried per search loop before giving up with
    /// [`Error::GenerationTimeout`]; prime searches are unbounded in theory,
    /// this keeps them terminating in pathological (test) environments
    pub iteration_cap: usize,
}

impl GenerationOptions {
    /// Default Miller-Rabin round count (error probability at most 4^-40)
    pub const DEFAULT_ROUNDS: usize = 40;

    /// Default iteration cap; orders of magnitude above the expected number
    /// of candidates for any practical bit-length
    pub const DEFAULT_ITERATION_CAP: usize = 1 << 20;
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            rounds: Self::DEFAULT_ROUNDS,
            iteration_cap: Self::DEFAULT_ITERATION_CAP,
        }
    }
}

/// Generate the common components p, q and g
///
/// # Returns
///
/// Tuple of three `BigUint`s. Ordered like this `(p, q, g)`
pub(crate) fn common_components<R>(
    rng: &mut R,
    size: ParamSize,
    options: &GenerationOptions,
) -> Result<(BigUint, BigUint, BigUint)>
where
    R: CryptoRng + RngCore + ?Sized,
{
    if options.rounds == 0 || options.iteration_cap == 0 {
        return Err(Error::Configuration);
    }

    let (p, q) = safe_prime(rng, size.bits(), options)?;
    let g = subgroup_generator(rng, &p, &q, options)?;

    Ok((p, q, g))
}

/// Calculate the public component from the common components and the private
/// component
#[inline]
pub(crate) fn public_component(components: &crate::Components, x: &BigUint) -> BigUint {
    components.g().modpow(x, components.p())
}
