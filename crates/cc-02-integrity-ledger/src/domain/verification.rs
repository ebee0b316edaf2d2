//! # Chain Auditing
//!
//! Pure integrity checks over a chain snapshot. Two independent checks run
//! per block: seal recomputation (every block, genesis included) and
//! predecessor linkage (every block after genesis). Both are reported
//! separately so a linkage-only break is visible even when the block's own
//! seal is internally consistent.

use shared_types::Block;

use super::reports::{ChainFault, ChainIntegrityReport, FaultKind};
use super::sealing::seal_block;

/// Audit an ordered chain snapshot.
pub fn audit_chain(blocks: &[Block]) -> ChainIntegrityReport {
    let mut faults = Vec::new();

    for (position, block) in blocks.iter().enumerate() {
        if seal_block(block) != block.hash {
            faults.push(ChainFault {
                index: block.index,
                kind: FaultKind::HashMismatch,
            });
        }

        if position > 0 {
            let previous = &blocks[position - 1];
            if block.previous_hash != previous.hash {
                faults.push(ChainFault {
                    index: block.index,
                    kind: FaultKind::BrokenLinkage,
                });
            }
        }
    }

    let mut corrupted_blocks: Vec<u64> = Vec::new();
    for fault in &faults {
        if corrupted_blocks.last() != Some(&fault.index) {
            corrupted_blocks.push(fault.index);
        }
    }

    ChainIntegrityReport {
        is_valid: faults.is_empty(),
        total_blocks: blocks.len() as u64,
        corrupted_blocks,
        faults,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sealing::{build_block, build_genesis};
    use serde_json::json;

    fn chain_of(extra: usize) -> Vec<Block> {
        let mut blocks = vec![build_genesis("2024-01-01T00:00:00+00:00".to_string())];
        for i in 0..extra {
            let last = blocks.last().unwrap();
            blocks.push(build_block(
                last.index + 1,
                format!("2024-01-01T00:00:{:02}+00:00", i + 1),
                json!({"case_id": format!("CASE-{i}"), "seq": i}),
                last.hash.clone(),
            ));
        }
        blocks
    }

    #[test]
    fn test_intact_chain_is_valid() {
        for n in [0usize, 1, 5] {
            let report = audit_chain(&chain_of(n));
            assert!(report.is_valid, "chain with {n} appends should be valid");
            assert_eq!(report.total_blocks, n as u64 + 1);
            assert!(report.corrupted_blocks.is_empty());
        }
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        let report = audit_chain(&[]);
        assert!(report.is_valid);
        assert_eq!(report.total_blocks, 0);
    }

    #[test]
    fn test_payload_tamper_detected_at_every_position() {
        for k in 0..4u64 {
            let mut blocks = chain_of(3);
            blocks[k as usize].payload = json!({"forged": true});

            let report = audit_chain(&blocks);
            assert!(!report.is_valid);
            assert!(report.corrupted_blocks.contains(&k), "index {k} not reported");
            assert!(report
                .faults
                .iter()
                .any(|f| f.index == k && f.kind == FaultKind::HashMismatch));
        }
    }

    #[test]
    fn test_linkage_only_break_detected() {
        // Forge the tail block so no successor linkage muddies the report.
        let mut blocks = chain_of(2);
        // Re-seal block 2 over a forged previous_hash: its own seal is
        // internally consistent, only the linkage is broken.
        let forged = build_block(
            blocks[2].index,
            blocks[2].timestamp.clone(),
            blocks[2].payload.clone(),
            "cc1:0000000000000000000000000000000000000000000000000000000000000000".to_string(),
        );
        blocks[2] = forged;

        let report = audit_chain(&blocks);
        assert!(!report.is_valid);
        assert_eq!(report.corrupted_blocks, vec![2]);
        assert_eq!(
            report.faults,
            vec![ChainFault {
                index: 2,
                kind: FaultKind::BrokenLinkage,
            }]
        );
    }

    #[test]
    fn test_both_faults_reported_once_each() {
        let mut blocks = chain_of(2);
        blocks[1].payload = json!({"forged": true});
        blocks[1].previous_hash = "cc1:BAD".to_string();

        let report = audit_chain(&blocks);
        assert_eq!(report.corrupted_blocks, vec![1]);
        assert_eq!(report.faults.len(), 2);
    }

    #[test]
    fn test_tamper_breaks_successor_linkage() {
        let mut blocks = chain_of(3);
        // Mutating payload without resealing leaves block 1's stored hash
        // unchanged, so only its own seal check fails; resealing it instead
        // would break block 2's linkage.
        let resealed = build_block(
            blocks[1].index,
            blocks[1].timestamp.clone(),
            json!({"forged": true}),
            blocks[1].previous_hash.clone(),
        );
        blocks[1] = resealed;

        let report = audit_chain(&blocks);
        assert!(!report.is_valid);
        assert!(report
            .faults
            .iter()
            .any(|f| f.index == 2 && f.kind == FaultKind::BrokenLinkage));
    }
}
