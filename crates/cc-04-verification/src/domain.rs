//! # Domain
//!
//! Verdicts and errors for evidence verification.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cc_01_evidence_hashing::HashError;
use cc_02_integrity_ledger::{LedgerError, RecordVerification};

/// Case details recorded alongside a submitted evidence digest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseMetadata {
    /// Case reference the evidence belongs to.
    pub case_id: String,
    /// Free-form description of the evidence item.
    pub description: String,
    /// Who submitted it (officer id, court id, citizen reference).
    pub submitted_by: String,
}

/// Outcome of comparing a file against its recorded digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceMatch {
    /// The file's bytes match the recorded digest.
    Match,
    /// The file's bytes do not match the recorded digest.
    NoMatch,
}

/// Full verdict for an evidence verification.
///
/// Carries both comparisons a court cares about: whether the file matches
/// the recorded digest, and whether the ledger record itself is authentic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceVerdict {
    /// File-versus-record comparison.
    pub outcome: EvidenceMatch,
    /// Digest recomputed from the presented file, normalized.
    pub computed_hash: String,
    /// Digest stored in the ledger record, normalized.
    pub recorded_hash: String,
    /// Seal verification of the ledger record itself.
    pub record: RecordVerification,
}

/// Failures while submitting or verifying evidence.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// Hashing the presented file failed.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// The ledger rejected the operation (unknown case, not initialized).
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The located record carries no evidence digest to compare against.
    #[error("ledger record for {case_id} carries no evidence hash")]
    MissingRecordedHash {
        /// Case whose record was malformed.
        case_id: String,
    },
}
