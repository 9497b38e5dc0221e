//! Error type shared across the AES core and padding modules.
//!
//! The teacher crate this library is derived from represents failures as
//! `Box<dyn std::error::Error>`, built either from `std::io::Error` or from
//! a plain string via `.into()`. `AesError` keeps that calling convention
//! (every fallible function here still returns `Result<_, Box<dyn Error>>`)
//! while giving callers a concrete type to match on if they want to.

use std::error::Error;
use std::fmt;

/// Errors produced by the AES core, mode drivers, and padding routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AesError {
    /// The key length did not match one of the AES-128/192/256 sizes.
    InvalidKeyLength { expected_one_of: [usize; 3], got: usize },
    /// The input to a block-wise mode was not a multiple of the block size.
    InvalidBlockLength { block_size: usize, got: usize },
    /// PKCS#7 padding was absent, inconsistent, or out of range.
    InvalidPadding(&'static str),
    /// The IV supplied to CBC/CTR was not exactly 16 bytes.
    InvalidIvLength { got: usize },
}

impl fmt::Display for AesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AesError::InvalidKeyLength { expected_one_of, got } => write!(
                f,
                "invalid key length: expected one of {:?} bytes, got {} bytes",
                expected_one_of, got
            ),
            AesError::InvalidBlockLength { block_size, got } => write!(
                f,
                "invalid data length: expected a multiple of {} bytes, got {} bytes",
                block_size, got
            ),
            AesError::InvalidPadding(reason) => write!(f, "invalid PKCS#7 padding: {}", reason),
            AesError::InvalidIvLength { got } => {
                write!(f, "invalid IV length: expected 16 bytes, got {} bytes", got)
            }
        }
    }
}

impl Error for AesError {}
