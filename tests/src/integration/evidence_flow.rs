//! # Evidence Flow Integration Tests
//!
//! Submit/verify round trips through the wired container, exactly as the
//! runtime assembles it.

#[cfg(test)]
mod tests {
    use cc_01_evidence_hashing::MemoryByteSource;
    use cc_02_integrity_ledger::IntegrityLedgerApi;
    use cc_04_verification::{CaseMetadata, EvidenceMatch};
    use custody_runtime::{CustodyContainer, RuntimeConfig};
    use shared_types::RecordKind;

    fn container() -> CustodyContainer {
        CustodyContainer::build(&RuntimeConfig::default()).unwrap()
    }

    fn cctv_case() -> CaseMetadata {
        CaseMetadata {
            case_id: "FIR-2024-0042".to_string(),
            description: "station platform cctv, 14:00-15:00".to_string(),
            submitted_by: "OFF-2210".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_then_verify_matches() {
        let container = container();
        let footage = MemoryByteSource::new(vec![0x42u8; 64 * 1024]);

        let receipt = container
            .verification
            .submit_source(&footage, &cctv_case())
            .await
            .unwrap();
        assert!(RecordKind::Evidence.matches(&receipt.block.payload));

        let verdict = container
            .verification
            .verify_evidence(&footage, "FIR-2024-0042")
            .await
            .unwrap();
        assert_eq!(verdict.outcome, EvidenceMatch::Match);
        assert!(verdict.record.is_authentic);
    }

    #[tokio::test]
    async fn test_single_bit_mutation_is_no_match() {
        let container = container();
        let mut footage = vec![0x42u8; 64 * 1024];
        container
            .verification
            .submit_source(&MemoryByteSource::new(footage.clone()), &cctv_case())
            .await
            .unwrap();

        footage[30_000] ^= 0x80;
        let verdict = container
            .verification
            .verify_evidence(&MemoryByteSource::new(footage), "FIR-2024-0042")
            .await
            .unwrap();

        assert_eq!(verdict.outcome, EvidenceMatch::NoMatch);
        assert_ne!(verdict.computed_hash, verdict.recorded_hash);
    }

    #[tokio::test]
    async fn test_submitted_digest_lands_in_intact_chain() {
        let container = container();
        for i in 0..3 {
            let case = CaseMetadata {
                case_id: format!("FIR-2024-{i:04}"),
                description: "exhibit".to_string(),
                submitted_by: "COURT-7".to_string(),
            };
            container
                .verification
                .submit_source(&MemoryByteSource::new(vec![i as u8; 256]), &case)
                .await
                .unwrap();
        }

        let report = container.ledger.verify_chain_integrity().unwrap();
        assert!(report.is_valid);
        assert_eq!(report.total_blocks, 4);
    }
}
