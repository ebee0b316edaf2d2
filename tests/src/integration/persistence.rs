//! # Persistence Integration Tests
//!
//! The JSON-lines store across process "restarts" (reopen), and tamper
//! detection against edits made directly to the file on disk.

#[cfg(test)]
mod tests {
    use cc_02_integrity_ledger::{
        IntegrityLedgerApi, IntegrityLedgerService, JsonLinesBlockStore, SystemTimeSource,
    };
    use serde_json::json;

    fn open_ledger(
        path: &std::path::Path,
    ) -> IntegrityLedgerService<JsonLinesBlockStore, SystemTimeSource> {
        IntegrityLedgerService::new(
            JsonLinesBlockStore::open(path).unwrap(),
            SystemTimeSource,
        )
    }

    #[test]
    fn test_chain_survives_reopen_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.jsonl");

        let before = {
            let ledger = open_ledger(&path);
            ledger.initialize().unwrap();
            ledger.append(json!({"case_id": "CASE-1"})).unwrap();
            ledger.append(json!({"case_id": "CASE-2"})).unwrap();
            ledger.chain().unwrap()
        };

        let reopened = open_ledger(&path);
        assert_eq!(reopened.chain().unwrap(), before);

        let report = reopened.verify_chain_integrity().unwrap();
        assert!(report.is_valid);
        assert_eq!(report.total_blocks, 3);
    }

    #[test]
    fn test_initialize_after_reopen_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.jsonl");

        {
            let ledger = open_ledger(&path);
            ledger.initialize().unwrap();
            ledger.append(json!({"case_id": "CASE-1"})).unwrap();
        }

        let reopened = open_ledger(&path);
        reopened.initialize().unwrap();
        assert_eq!(reopened.chain().unwrap().len(), 2);
    }

    #[test]
    fn test_on_disk_edit_is_detected_on_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.jsonl");

        {
            let ledger = open_ledger(&path);
            ledger.initialize().unwrap();
            ledger
                .append(json!({"case_id": "CASE-1", "amount": 50_000}))
                .unwrap();
        }

        // Edit the record in place, the way an attacker with file access
        // would: same shape, different amount, seal left untouched.
        let contents = std::fs::read_to_string(&path).unwrap();
        let forged = contents.replace("50000", "99999");
        assert_ne!(contents, forged, "fixture must actually change the file");
        std::fs::write(&path, forged).unwrap();

        let reopened = open_ledger(&path);
        let report = reopened.verify_chain_integrity().unwrap();
        assert!(!report.is_valid);
        assert_eq!(report.corrupted_blocks, vec![1]);

        let verification = reopened.verify_record("CASE-1").unwrap();
        assert!(verification.tampered);
    }
}
