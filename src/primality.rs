//!
//! Probabilistic primality testing used by the parameter generation routines
//!

use crate::two;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// Trial division fast-path; also makes the test deterministic for these
const SMALL_PRIMES: &[u8] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Miller-Rabin primality test with random witnesses
///
/// Composites slip through with probability at most `4^-rounds`; parameter
/// generation defaults to 40 rounds. Small candidates are
/// settled by trial division before any witness is drawn, so known small
/// primes and composites are classified deterministically. `n < 2` is
/// rejected outright.
#[must_use]
pub fn is_probable_prime<R>(n: &BigUint, rounds: usize, rng: &mut R) -> bool
where
    R: CryptoRng + RngCore + ?Sized,
{
    if *n < two() {
        return false;
    }

    for &small in SMALL_PRIMES {
        let small = BigUint::from(small);
        if *n == small {
            return true;
        }
        if (n % &small).is_zero() {
            return false;
        }
    }

    // n is odd and > 37 from here on; write n - 1 = 2^t * d with d odd
    let n_minus_one = n - BigUint::one();
    let mut d = n_minus_one.clone();
    let mut t = 0_usize;
    while d.is_even() {
        d >>= 1;
        t += 1;
    }

    'witness: for _ in 0..rounds {
        // uniform in [2, n-2]
        let a = rng.gen_biguint_range(&two(), &n_minus_one);
        let mut x = a.modpow(&d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..t {
            x = x.modpow(&two(), n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}
