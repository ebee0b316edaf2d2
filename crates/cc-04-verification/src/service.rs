//! # Verification Service
//!
//! Submission path: hash → append a tagged evidence record.
//! Verification path: hash → locate record → compare normalized digests.

use std::sync::Arc;

use serde_json::{json, Value};

use cc_01_evidence_hashing::{ByteSource, ContentDigest, ContentHasher, EvidenceHashingApi};
use cc_02_integrity_ledger::{AppendReceipt, IntegrityLedgerApi};
use shared_types::records::{self, RECORD_KIND_KEY};
use shared_types::{Block, RecordKind};

use crate::domain::{CaseMetadata, EvidenceMatch, EvidenceVerdict, VerificationError};

/// Payload key holding the recorded content digest.
const EVIDENCE_HASH_KEY: &str = "evidence_hash";

/// The Verification Service.
///
/// Stateless orchestration over a hasher and a ledger handle.
pub struct VerificationService<L>
where
    L: IntegrityLedgerApi,
{
    hasher: ContentHasher,
    ledger: Arc<L>,
}

impl<L> VerificationService<L>
where
    L: IntegrityLedgerApi,
{
    /// Create a service over the given hasher and ledger.
    pub fn new(hasher: ContentHasher, ledger: Arc<L>) -> Self {
        Self { hasher, ledger }
    }

    /// Record an already-computed digest for a case.
    pub fn submit_evidence(
        &self,
        digest: &ContentDigest,
        case: &CaseMetadata,
    ) -> Result<AppendReceipt, VerificationError> {
        let payload = json!({
            RECORD_KIND_KEY: RecordKind::Evidence.tag(),
            "case_id": case.case_id,
            "description": case.description,
            "submitted_by": case.submitted_by,
            EVIDENCE_HASH_KEY: digest.hash,
            "algorithm": digest.algorithm,
            "file_size": digest.file_size,
            "hashed_at": digest.timestamp,
        });
        let receipt = self.ledger.append(payload)?;
        tracing::info!(
            "[cc-04] 📄 evidence recorded for {} in block #{}",
            case.case_id,
            receipt.block.index
        );
        Ok(receipt)
    }

    /// Hash a source and record the digest for a case in one step.
    pub async fn submit_source(
        &self,
        source: &dyn ByteSource,
        case: &CaseMetadata,
    ) -> Result<AppendReceipt, VerificationError> {
        let digest = self.hasher.hash(source).await?;
        self.submit_evidence(&digest, case)
    }

    /// Verify a presented file against the digest recorded for `case_id`.
    ///
    /// A mismatch is a normal outcome reported in the verdict; only unknown
    /// cases, malformed records, and read failures raise errors.
    pub async fn verify_evidence(
        &self,
        source: &dyn ByteSource,
        case_id: &str,
    ) -> Result<EvidenceVerdict, VerificationError> {
        let record = self.ledger.verify_record(case_id)?;
        let block = self.ledger.find_block(&|block: &Block| {
            records::record_case_id(&block.payload) == Some(case_id)
                || records::record_transaction_id(&block.payload) == Some(case_id)
        })?;
        let recorded_hash = block
            .payload
            .get(EVIDENCE_HASH_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| VerificationError::MissingRecordedHash {
                case_id: case_id.to_string(),
            })?;

        let comparison = self.hasher.verify(source, recorded_hash).await?;
        let outcome = if comparison.is_match {
            EvidenceMatch::Match
        } else {
            tracing::warn!("[cc-04] ⚠ evidence mismatch for {}", case_id);
            EvidenceMatch::NoMatch
        };
        Ok(EvidenceVerdict {
            outcome,
            computed_hash: comparison.computed_hash,
            recorded_hash: comparison.known_hash,
            record,
        })
    }
}
