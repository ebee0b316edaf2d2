//! # Domain
//!
//! Pure chain logic: block sealing, chain auditing, reports, and errors.
//! Nothing in this module performs I/O; the service feeds it snapshots.

pub mod errors;
pub mod reports;
pub mod sealing;
pub mod verification;

pub use errors::{LedgerError, StoreError};
pub use reports::{
    AppendReceipt, ChainFault, ChainIntegrityReport, FaultKind, LedgerStats, RecordVerification,
};
pub use sealing::{
    block_preimage, build_block, build_genesis, derive_transaction_id, genesis_payload, seal_block,
};
pub use verification::audit_chain;
