//! # CC-04 Verification
//!
//! Thin orchestration tying the content hasher (cc-01) to the integrity
//! ledger (cc-02): record an evidence digest at submission time, and later
//! answer "does this file still match what was recorded".
//!
//! This is the only subsystem allowed to combine hashing and ledger
//! lookups; it owns no state of its own.

pub mod domain;
pub mod service;

pub use domain::{CaseMetadata, EvidenceMatch, EvidenceVerdict, VerificationError};
pub use service::VerificationService;
