//! # Domain Entities
//!
//! The hash-linked [`Block`] record shared by every subsystem.

use serde::{Deserialize, Serialize};

/// Index of the genesis block.
pub const GENESIS_INDEX: u64 = 0;

/// Sentinel `previous_hash` value carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// One immutable, hash-linked record in the integrity ledger.
///
/// A block is created exactly once, by the ledger's append path, and is never
/// mutated afterwards. Its `hash` is a pure function of the remaining fields
/// (see `shared-crypto`), and `previous_hash` must equal the preceding
/// block's `hash` for every index > 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain, starting at 0 (genesis).
    pub index: u64,
    /// RFC 3339 timestamp, set at creation time.
    pub timestamp: String,
    /// Opaque structured record (case record, contract snapshot, message).
    pub payload: serde_json::Value,
    /// Hash of the preceding block; `"0"` for genesis.
    pub previous_hash: String,
    /// Computed block hash (`"<format-tag>:<hex>"`), never set directly.
    pub hash: String,
    /// Reserved for format compatibility; always 0 (no proof-of-work).
    pub nonce: u64,
}

impl Block {
    /// Whether this block occupies the genesis position.
    pub fn is_genesis(&self) -> bool {
        self.index == GENESIS_INDEX && self.previous_hash == GENESIS_PREVIOUS_HASH
    }
}
