//! Validation of exponent candidates and annotation of the known Mersenne prime exponents.

use crate::error::Error;
use crate::extract::{extract_candidates, Candidate};
use crate::nt_funcs::is_prime;
use crate::tables::MERSENNE_EXPONENTS;
use crate::traits::ExponentConfig;
use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Marker prepended to the literals of known Mersenne prime exponents by [annotate()]
pub const KNOWN_MERSENNE_MARKER: &str = "\u{203c}\u{fe0f}";

/// Classification of a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExponentStatus {
    /// A prime within the configured range, `known` if 2^p - 1 is a known Mersenne prime
    Valid { known: bool },
    /// Below 2 or above the configured ceiling
    OutOfRange,
    /// Proven composite
    Composite,
    /// Within the configured range but too large for an exact primality verdict
    Unsupported,
}

impl ExponentStatus {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, ExponentStatus::Valid { .. })
    }
}

/// Return whether p is the exponent of a known Mersenne prime 2^p - 1
pub fn is_known_mersenne_exponent(p: &BigUint) -> bool {
    match p.to_u64() {
        Some(p) => MERSENNE_EXPONENTS.binary_search(&p).is_ok(),
        None => false,
    }
}

/// Classify an integer as an exponent. The range is checked first, so integers above the
/// ceiling are never tested for primality.
pub fn classify(n: &BigUint, config: &ExponentConfig) -> ExponentStatus {
    let in_range = match n.to_u128() {
        Some(v) => v >= 2 && v <= config.ceiling,
        None => false,
    };
    if !in_range {
        return ExponentStatus::OutOfRange;
    }

    match is_prime(n) {
        Ok(true) => ExponentStatus::Valid {
            known: is_known_mersenne_exponent(n),
        },
        Ok(false) => ExponentStatus::Composite,
        Err(e @ Error::UnsupportedMagnitude { .. }) => {
            warn!("cannot validate exponent {}: {}", n, e);
            ExponentStatus::Unsupported
        }
    }
}

/// Extract the candidates in the text and classify each of them, in order of first appearance
pub fn scan(text: &str, config: Option<ExponentConfig>) -> Vec<(Candidate<'_>, ExponentStatus)> {
    let config = config.unwrap_or_default();
    extract_candidates(text)
        .into_iter()
        .map(|c| {
            let status = classify(c.value(), &config);
            debug!("candidate {:?} = {}: {:?}", c.text(), c.value(), status);
            (c, status)
        })
        .collect()
}

/// Return the valid exponents in the text, in order of first appearance
pub fn valid_exponents(text: &str, config: Option<ExponentConfig>) -> Vec<BigUint> {
    scan(text, config)
        .into_iter()
        .filter(|(_, status)| status.is_valid())
        .map(|(c, _)| c.into_value())
        .collect()
}

/// Return the literals of the valid exponents in the text, where known Mersenne prime exponents
/// are prefixed with [KNOWN_MERSENNE_MARKER].
///
/// Return None if there is no valid exponent in the text.
pub fn annotate(text: &str, config: Option<ExponentConfig>) -> Option<Vec<String>> {
    let annotated: Vec<String> = scan(text, config)
        .into_iter()
        .filter_map(|(c, status)| match status {
            ExponentStatus::Valid { known: true } => {
                Some(format!("{}{}", KNOWN_MERSENNE_MARKER, c.text()))
            }
            ExponentStatus::Valid { known: false } => Some(c.text().to_string()),
            _ => None,
        })
        .collect();

    if annotated.is_empty() {
        None
    } else {
        Some(annotated)
    }
}
