//! # Shared Types
//!
//! Domain entities shared across the Custody-Chain subsystems.
//!
//! This crate is the Single Source of Truth for:
//! - The [`Block`] record format used by the integrity ledger
//! - The payload tags that classify ledger records (`records` module)
//!
//! It deliberately carries no logic beyond field accessors; hashing lives in
//! `shared-crypto` and chain semantics live in `cc-02-integrity-ledger`.

pub mod entities;
pub mod records;

pub use entities::{Block, GENESIS_INDEX, GENESIS_PREVIOUS_HASH};
pub use records::{
    record_case_id, record_transaction_id, RecordKind, RECORD_KIND_KEY,
};
