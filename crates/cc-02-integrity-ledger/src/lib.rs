//! # CC-02 Integrity Ledger
//!
//! The append-only, hash-linked record chain at the heart of Custody-Chain.
//!
//! **Subsystem ID:** 2
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Hold evidence records, contract snapshots, and free-form messages in an
//! ordered chain of [`Block`]s such that any undetected mutation of history
//! would require redoing every subsequent seal.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Seal Correctness | `block.hash` equals the recomputed seal |
//! | 2 | Linkage | `block[i].previous_hash == block[i-1].hash` |
//! | 3 | Append-Only | No delete or update operation exists |
//! | 4 | Single Writer | At most one append holds the chain at a time |
//! | 5 | Genesis First | All operations except `initialize` require genesis |
//!
//! Tampering is *reported data*, never an exception: `verify_record` and
//! `verify_chain_integrity` return structured reports and only structural
//! misuse (`NotInitialized`, `NotFound`, store I/O) raises [`LedgerError`].
//!
//! ## Crate Structure
//!
//! - `domain/` - Sealing, chain auditing, reports, errors
//! - `ports/` - `IntegrityLedgerApi` (inbound), `BlockStore`/`TimeSource` (outbound)
//! - `adapters/` - In-memory and JSON-lines block stores
//! - `service.rs` - `IntegrityLedgerService`

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::{InMemoryBlockStore, JsonLinesBlockStore};
pub use domain::errors::{LedgerError, StoreError};
pub use domain::reports::{
    AppendReceipt, ChainFault, ChainIntegrityReport, FaultKind, LedgerStats, RecordVerification,
};
pub use ports::inbound::IntegrityLedgerApi;
pub use ports::outbound::{BlockStore, FixedTimeSource, SystemTimeSource, TimeSource};
pub use service::IntegrityLedgerService;
pub use shared_types::Block;
