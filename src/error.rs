//! Error types of the primality oracle.

use thiserror::Error;

/// Errors returned by the deterministic primality test.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The integer is too large for the deterministic witness table, so no exact verdict
    /// can be given.
    #[error("unsupported magnitude: {bits}-bit integer is not below the witness table limit {limit}")]
    UnsupportedMagnitude {
        /// Bit length of the rejected integer.
        bits: usize,
        /// Exclusive upper bound of the witness table.
        limit: u128,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
