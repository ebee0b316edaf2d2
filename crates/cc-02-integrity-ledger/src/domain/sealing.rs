//! # Block Sealing
//!
//! Pure functions turning payloads into sealed blocks. The seal preimage is
//! the concatenation of `index`, `timestamp`, the canonical JSON of the
//! payload, `previous_hash`, and `nonce`; the seal itself is the
//! domain-separated two-pass digest from `shared-crypto`.

use serde_json::{json, Value};
use shared_crypto::{canonical_json, ledger_seal};
use shared_types::records::RECORD_KIND_KEY;
use shared_types::{Block, RecordKind, GENESIS_INDEX, GENESIS_PREVIOUS_HASH};

/// Canonical preimage of a block's seal.
pub fn block_preimage(
    index: u64,
    timestamp: &str,
    payload: &Value,
    previous_hash: &str,
    nonce: u64,
) -> String {
    format!(
        "{index}{timestamp}{}{previous_hash}{nonce}",
        canonical_json(payload)
    )
}

/// Recompute the seal of an existing block from its stored fields.
pub fn seal_block(block: &Block) -> String {
    ledger_seal(&block_preimage(
        block.index,
        &block.timestamp,
        &block.payload,
        &block.previous_hash,
        block.nonce,
    ))
}

/// Construct a sealed block at `index` linked to `previous_hash`.
pub fn build_block(index: u64, timestamp: String, payload: Value, previous_hash: String) -> Block {
    let nonce = 0;
    let hash = ledger_seal(&block_preimage(
        index,
        &timestamp,
        &payload,
        &previous_hash,
        nonce,
    ));
    Block {
        index,
        timestamp,
        payload,
        previous_hash,
        hash,
        nonce,
    }
}

/// Sentinel payload carried by the genesis block.
pub fn genesis_payload() -> Value {
    json!({
        RECORD_KIND_KEY: RecordKind::Genesis.tag(),
        "message": "custody-chain genesis",
    })
}

/// Construct the genesis block.
pub fn build_genesis(timestamp: String) -> Block {
    build_block(
        GENESIS_INDEX,
        timestamp,
        genesis_payload(),
        GENESIS_PREVIOUS_HASH.to_string(),
    )
}

/// Derive a caller-facing transaction id from a sealed block.
///
/// Deterministic: the id is a function of the block's position and seal.
pub fn derive_transaction_id(block: &Block) -> String {
    let seal_tail = block
        .hash
        .split(':')
        .next_back()
        .unwrap_or(&block.hash)
        .chars()
        .take(12)
        .collect::<String>();
    format!("TXN-{:06}-{seal_tail}", block.index)
}
