//! # Reports
//!
//! Structured results returned by ledger operations. Callers must check the
//! `is_authentic` / `is_valid` fields; tampering never raises an error.

use serde::{Deserialize, Serialize};
use shared_types::Block;

/// Result of a successful append.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppendReceipt {
    /// The sealed block as stored.
    pub block: Block,
    /// Derived transaction id for caller convenience.
    pub transaction_id: String,
}

/// Result of verifying a single record against its stored seal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordVerification {
    /// Whether the stored seal matches the recomputed one.
    pub is_authentic: bool,
    /// Seal recorded at append time.
    pub original_hash: String,
    /// Seal recomputed from the block's current fields.
    pub current_hash: String,
    /// Convenience negation of `is_authentic`.
    pub tampered: bool,
    /// Timestamp carried by the verified block.
    pub timestamp: String,
}

/// A single integrity failure found while auditing the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainFault {
    /// Index of the offending block.
    pub index: u64,
    /// Which invariant the block violates.
    pub kind: FaultKind,
}

/// Chain invariant violation categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultKind {
    /// The block's stored seal does not match its recomputed seal.
    HashMismatch,
    /// The block's `previous_hash` does not match its predecessor's seal.
    BrokenLinkage,
}

/// Result of auditing the full chain.
///
/// `corrupted_blocks` lists each failing index once, in chain order, even
/// when a block fails both checks; `faults` keeps the per-category detail
/// so a linkage-only break is never silently folded into a hash mismatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainIntegrityReport {
    /// True when no fault was found.
    pub is_valid: bool,
    /// Number of blocks audited.
    pub total_blocks: u64,
    /// Failing block indices, ordered, deduplicated across categories.
    pub corrupted_blocks: Vec<u64>,
    /// Every individual fault, in chain order.
    pub faults: Vec<ChainFault>,
}

/// Summary of the current chain, for audit logs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    /// Number of blocks in the chain.
    pub total_blocks: u64,
    /// Seal of the genesis block.
    pub genesis_hash: String,
    /// Seal of the newest block.
    pub head_hash: String,
    /// Index of the newest block.
    pub head_index: u64,
}
