//! Standalone number theoretic functions

use crate::error::{Error, Result};
use crate::primality::{PrimalityBase, PrimalityRefBase};
use crate::tables::{MILLER_RABIN_BOUNDS, SMALL_PRIMES};
use crate::traits::PrimalityUtils;
use num_traits::ToPrimitive;

/// Exclusive upper bound of the integers that [is_prime()] can decide
pub fn max_supported() -> u128 {
    MILLER_RABIN_BOUNDS[MILLER_RABIN_BOUNDS.len() - 1].1
}

/// Return the number of leading [SMALL_PRIMES] that are sufficient witnesses for the target,
/// which is chosen by the smallest bound in the table that is strictly greater than the target.
/// Return None if the target is not below any bound.
pub fn witness_count<T: ToPrimitive>(target: &T) -> Option<usize> {
    let n = target.to_u128()?;
    MILLER_RABIN_BOUNDS
        .iter()
        .find(|&&(_, bound)| n < bound)
        .map(|&(count, _)| count)
}

/// Deterministic primality test on an arbitrary precision integer.
///
/// Small factors are removed by trial division with [SMALL_PRIMES], then a Miller-Rabin test is
/// carried out with the witnesses selected from the bound table. The verdict is exact, there is
/// no probabilistic fallback: integers that are not below [max_supported()] and have no small
/// factor return [Error::UnsupportedMagnitude].
pub fn is_prime<T: PrimalityBase>(target: &T) -> Result<bool>
where
    for<'r> &'r T: PrimalityRefBase<T>,
{
    if target < &T::from(2u8) {
        return Ok(false);
    }

    // shortcuts
    for &p in SMALL_PRIMES.iter() {
        let p = T::from(p);
        if target == &p {
            return Ok(true);
        }
        if target.is_multiple_of(&p) {
            return Ok(false);
        }
    }

    let count = witness_count(target).ok_or_else(|| Error::UnsupportedMagnitude {
        bits: target.bits(),
        limit: max_supported(),
    })?;

    // target is odd and larger than every witness here
    Ok(SMALL_PRIMES
        .iter()
        .take(count)
        .all(|&b| target.is_sprp(T::from(b))))
}
