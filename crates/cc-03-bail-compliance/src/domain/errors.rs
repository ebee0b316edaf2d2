//! # Domain Errors
//!
//! Error types for bail compliance.
//!
//! A refused release or a sub-100 compliance score is not an error; only
//! unknown ids, structural misuse, and ledger failures surface here.

use thiserror::Error;

use cc_02_integrity_ledger::LedgerError;

use super::value_objects::ContractStatus;

/// Bail compliance error types.
#[derive(Debug, Error)]
pub enum ComplianceError {
    /// No contract exists for this transaction id.
    #[error("unknown bail transaction: {transaction_id}")]
    UnknownTransaction {
        /// The id that was looked up.
        transaction_id: String,
    },

    /// A contract cannot be created without scheduled court dates.
    #[error("contract requires at least one scheduled court date")]
    NoCourtDates,

    /// A state transition outside the defined machine was attempted.
    #[error("invalid contract transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// Current state.
        from: ContractStatus,
        /// Attempted state.
        to: ContractStatus,
    },

    /// Persisting a contract snapshot to the ledger failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
