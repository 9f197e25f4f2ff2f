//! Finds Mersenne prime exponent candidates (such as `M136279841`) in free text and validates
//! them with an exact primality test on arbitrary precision integers.
//!
//! ```
//! use mersenne_scan::{annotate, valid_exponents};
//! use num_bigint::BigUint;
//!
//! assert_eq!(annotate("M13 and M4", None), Some(vec!["‼️M13".to_string()]));
//! assert_eq!(valid_exponents("see M127 now", None), [BigUint::from(127u32)]);
//! ```

mod error;
mod exponent;
mod extract;
mod integer;
mod primality;
mod tables;
mod traits;

pub mod nt_funcs;

pub use error::{Error, Result};
pub use exponent::{
    annotate, classify, is_known_mersenne_exponent, scan, valid_exponents, ExponentStatus,
    KNOWN_MERSENNE_MARKER,
};
pub use extract::{extract_candidates, find_candidates, Candidate};
pub use nt_funcs::is_prime;
pub use traits::{
    BitTest, ExponentConfig, ModInt, PrimalityUtils, DEFAULT_EXPONENT_CEILING,
    MERSENNE_ORG_CEILING,
};

pub mod detail {
    pub use super::primality::{is_composite, PrimalityBase, PrimalityRefBase};
    pub use super::tables::{MERSENNE_EXPONENTS, MILLER_RABIN_BOUNDS, SMALL_PRIMES};
}
