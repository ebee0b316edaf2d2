//! # Domain Errors
//!
//! Error types for the integrity ledger.
//!
//! Integrity failures are reported data, not errors: only structural misuse
//! (operating before genesis, looking up a record that does not exist) and
//! store failures appear here.

use thiserror::Error;

/// Errors raised by the ledger service.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger was used before `initialize()` created the genesis block.
    #[error("ledger not initialized: genesis block missing")]
    NotInitialized,

    /// No block matched the requested case id, transaction id, or predicate.
    #[error("record not found: {reference}")]
    NotFound {
        /// What was looked up.
        reference: String,
    },

    /// The underlying block store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by block store adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure reading or writing the store.
    #[error("block store I/O error: {message}")]
    Io {
        /// Underlying failure description.
        message: String,
    },

    /// Stored data could not be decoded.
    #[error("block store corruption: {message}")]
    Corrupt {
        /// What failed to decode.
        message: String,
    },
}

impl StoreError {
    /// Wrap an I/O error.
    pub fn io(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }

    /// Wrap a decode failure.
    pub fn corrupt(message: impl Into<String>) -> Self {
        StoreError::Corrupt {
            message: message.into(),
        }
    }
}
