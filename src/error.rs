//! Engine errors.
//!
//! Every error here is a deterministic function of the input, except
//! [`EngineError::Entropy`], which surfaces a failing OS randomness source.

use thiserror::Error;

/// Errors produced by the fairness engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Seed hex string has fewer than 8 leading characters.
    #[error("seed hex string too short: need 8 hex characters, got {len}")]
    InvalidSeedLength {
        /// Length of the supplied string in bytes.
        len: usize,
    },

    /// Leading 8 characters of the seed are not hexadecimal digits.
    #[error("seed is not valid hex: {0}")]
    InvalidHexEncoding(#[from] hex::FromHexError),

    /// Caller-supplied parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operating system entropy source failed.
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] rand::Error),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
