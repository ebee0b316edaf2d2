//! # Bail Compliance Integration Tests
//!
//! The full contract lifecycle over a shared ledger, including the ledger
//! records each mutation leaves behind.

#[cfg(test)]
mod tests {
    use cc_02_integrity_ledger::IntegrityLedgerApi;
    use cc_03_bail_compliance::{BailComplianceApi, ContractRequest, ContractStatus};
    use custody_runtime::{CustodyContainer, RuntimeConfig};
    use serde_json::json;
    use shared_types::{records, RecordKind};

    fn container() -> CustodyContainer {
        CustodyContainer::build(&RuntimeConfig::default()).unwrap()
    }

    fn request() -> ContractRequest {
        ContractRequest {
            case_id: "CASE-2024-112".to_string(),
            accused_id: "ACC-31".to_string(),
            amount: 50_000,
            court_dates: vec!["2024-03-01".to_string(), "2024-04-01".to_string()],
        }
    }

    #[test]
    fn test_full_lifecycle_locked_active_refunded() {
        let container = container();
        let contract = container.compliance.create_contract(request()).unwrap();
        let tx = contract.transaction_id.as_str();
        assert_eq!(contract.status, ContractStatus::Locked);

        // Half compliant: release refused, nothing changes.
        let half = container
            .compliance
            .verify_appearance(tx, "2024-03-01", json!({"iris": "scan-1"}))
            .unwrap();
        assert_eq!(half.compliance_score, 50);
        let refused = container.compliance.release(tx).unwrap();
        assert!(!refused.success);
        assert_eq!(refused.refund_amount, 0);
        assert_eq!(
            container.compliance.get_status(tx).unwrap().status,
            ContractStatus::Locked
        );

        // Fully compliant: contract activates, release pays out.
        let full = container
            .compliance
            .verify_appearance(tx, "2024-04-01", json!({"iris": "scan-2"}))
            .unwrap();
        assert_eq!(full.compliance_score, 100);
        let status = container.compliance.get_status(tx).unwrap();
        assert_eq!(status.status, ContractStatus::Active);
        assert!(status.refund_eligible);

        let released = container.compliance.release(tx).unwrap();
        assert!(released.success);
        assert_eq!(released.refund_amount, 50_000);
        assert_eq!(
            container.compliance.get_status(tx).unwrap().status,
            ContractStatus::Refunded
        );
    }

    #[test]
    fn test_repeat_appearance_counts_once() {
        let container = container();
        let contract = container.compliance.create_contract(request()).unwrap();
        let tx = contract.transaction_id.as_str();

        for _ in 0..3 {
            container
                .compliance
                .verify_appearance(tx, "2024-03-01", json!("fp"))
                .unwrap();
        }

        let status = container.compliance.get_status(tx).unwrap();
        assert_eq!(status.verified_appearances.len(), 1);
        assert_eq!(status.compliance_score, 50);
        assert_eq!(status.status, ContractStatus::Locked);
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let container = container();
        assert!(container
            .compliance
            .verify_appearance("BAIL-NONEXISTENT", "2024-03-01", json!(null))
            .is_err());
        assert!(container.compliance.release("BAIL-NONEXISTENT").is_err());
        assert!(container.compliance.get_status("BAIL-NONEXISTENT").is_none());
    }

    #[test]
    fn test_every_mutation_is_a_ledger_record() {
        let container = container();
        let contract = container.compliance.create_contract(request()).unwrap();
        let tx = contract.transaction_id.as_str();

        container
            .compliance
            .verify_appearance(tx, "2024-03-01", json!(null))
            .unwrap();
        container
            .compliance
            .verify_appearance(tx, "2024-04-01", json!(null))
            .unwrap();
        container.compliance.release(tx).unwrap();

        let chain = container.ledger.chain().unwrap();
        assert_eq!(chain.len(), 5); // genesis + create + 2 appearances + refund
        assert!(RecordKind::BailContract.matches(&chain[1].payload));
        assert!(RecordKind::AppearanceVerification.matches(&chain[2].payload));
        assert!(RecordKind::AppearanceVerification.matches(&chain[3].payload));
        assert!(RecordKind::BailRefund.matches(&chain[4].payload));
        for block in &chain[1..] {
            assert_eq!(records::record_transaction_id(&block.payload), Some(tx));
        }

        // Contract records can be located and verified like any other.
        let verification = container.ledger.verify_record(tx).unwrap();
        assert!(verification.is_authentic);

        let report = container.ledger.verify_chain_integrity().unwrap();
        assert!(report.is_valid);
    }
}
