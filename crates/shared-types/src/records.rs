//! # Ledger Record Tags
//!
//! The ledger treats payloads as opaque JSON except for two concerns:
//! classifying a record by its kind tag, and locating a record by an
//! embedded `case_id` / `transaction_id`. Both live here so every subsystem
//! tags and looks up records the same way.

use serde_json::Value;

/// Payload key carrying the record kind tag.
pub const RECORD_KIND_KEY: &str = "record_kind";

/// Payload key carrying the case reference.
pub const CASE_ID_KEY: &str = "case_id";

/// Payload key carrying the bail transaction reference.
pub const TRANSACTION_ID_KEY: &str = "transaction_id";

/// Classification of ledger payloads written by the core subsystems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// Sentinel payload of the genesis block.
    Genesis,
    /// Evidence submission carrying a content hash.
    Evidence,
    /// Snapshot of a bail contract at creation.
    BailContract,
    /// Snapshot written when a court appearance is verified.
    AppearanceVerification,
    /// Record written when a bail amount is released.
    BailRefund,
}

impl RecordKind {
    /// Tag string stored under [`RECORD_KIND_KEY`].
    pub fn tag(&self) -> &'static str {
        match self {
            RecordKind::Genesis => "genesis",
            RecordKind::Evidence => "evidence_record",
            RecordKind::BailContract => "bail_contract",
            RecordKind::AppearanceVerification => "appearance_verification",
            RecordKind::BailRefund => "bail_refund",
        }
    }

    /// Whether `payload` carries this kind's tag.
    pub fn matches(&self, payload: &Value) -> bool {
        payload
            .get(RECORD_KIND_KEY)
            .and_then(Value::as_str)
            .is_some_and(|tag| tag == self.tag())
    }
}

/// Case reference embedded in a payload, if any.
pub fn record_case_id(payload: &Value) -> Option<&str> {
    payload.get(CASE_ID_KEY).and_then(Value::as_str)
}

/// Bail transaction reference embedded in a payload, if any.
pub fn record_transaction_id(payload: &Value) -> Option<&str> {
    payload.get(TRANSACTION_ID_KEY).and_then(Value::as_str)
}
