//! # Domain Errors
//!
//! Error types for the evidence hashing subsystem.

use thiserror::Error;

/// Failures while hashing a byte source.
///
/// Digest mismatches are not errors; they are reported through
/// `HashComparison`. Only read failures and cancellation surface here.
#[derive(Debug, Error)]
pub enum HashError {
    /// A chunk could not be read from the byte source.
    #[error("failed to read byte source: {0}")]
    Io(#[from] std::io::Error),

    /// The source returned fewer bytes than the requested range.
    #[error("byte source truncated: expected {expected} bytes at offset {offset}, got {got}")]
    TruncatedSource {
        /// Range start offset.
        offset: u64,
        /// Bytes requested.
        expected: u64,
        /// Bytes returned.
        got: u64,
    },

    /// The caller cancelled the operation between chunks.
    #[error("hashing cancelled before completion")]
    Cancelled,
}
