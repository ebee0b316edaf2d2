//! # Integrity Ledger Service
//!
//! The main service implementing the ledger API over a pluggable store.
//!
//! ## Concurrency
//!
//! The store sits behind a `RwLock`: `initialize` and `append` take the
//! write lock for the entire read-tail/seal/push sequence, so two appends
//! can never interleave and corrupt the linkage. Read operations take the
//! read lock and audit a consistent snapshot.

use parking_lot::RwLock;
use serde_json::Value;
use shared_types::{records, Block};

use crate::adapters::InMemoryBlockStore;
use crate::domain::errors::LedgerError;
use crate::domain::reports::{
    AppendReceipt, ChainIntegrityReport, LedgerStats, RecordVerification,
};
use crate::domain::sealing::{build_block, build_genesis, derive_transaction_id, seal_block};
use crate::domain::verification::audit_chain;
use crate::ports::inbound::IntegrityLedgerApi;
use crate::ports::outbound::{BlockStore, SystemTimeSource, TimeSource};

/// The Integrity Ledger Service.
///
/// Generic over its store and clock; the composition root decides
/// durability (in-memory vs JSON-lines file) without touching chain logic.
pub struct IntegrityLedgerService<S, T>
where
    S: BlockStore,
    T: TimeSource,
{
    store: RwLock<S>,
    time_source: T,
}

impl IntegrityLedgerService<InMemoryBlockStore, SystemTimeSource> {
    /// Service over a fresh in-memory store and the system clock.
    pub fn new_in_memory() -> Self {
        Self::new(InMemoryBlockStore::new(), SystemTimeSource)
    }
}

impl<S, T> IntegrityLedgerService<S, T>
where
    S: BlockStore,
    T: TimeSource,
{
    /// Create a service over the given store and clock.
    pub fn new(store: S, time_source: T) -> Self {
        Self {
            store: RwLock::new(store),
            time_source,
        }
    }

    /// Run `f` with mutable access to the store, bypassing every chain
    /// guarantee. Exists solely so tamper-detection tests can forge history.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_store_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.store.write())
    }

    fn payload_matches(payload: &Value, reference: &str) -> bool {
        records::record_case_id(payload) == Some(reference)
            || records::record_transaction_id(payload) == Some(reference)
    }
}

impl<S, T> IntegrityLedgerApi for IntegrityLedgerService<S, T>
where
    S: BlockStore,
    T: TimeSource,
{
    fn initialize(&self) -> Result<(), LedgerError> {
        let mut store = self.store.write();
        if !store.is_empty()? {
            return Ok(());
        }

        let genesis = build_genesis(self.time_source.now());
        store.append(&genesis)?;
        tracing::info!("[cc-02] ⛓ genesis block sealed: {}", genesis.hash);
        Ok(())
    }

    fn append(&self, payload: Value) -> Result<AppendReceipt, LedgerError> {
        let mut store = self.store.write();
        let tail = store.last()?.ok_or(LedgerError::NotInitialized)?;

        let block = build_block(
            tail.index + 1,
            self.time_source.now(),
            payload,
            tail.hash.clone(),
        );
        store.append(&block)?;

        let transaction_id = derive_transaction_id(&block);
        tracing::info!(
            "[cc-02] 📦 sealed block #{} ({})",
            block.index,
            transaction_id
        );
        Ok(AppendReceipt {
            block,
            transaction_id,
        })
    }

    fn find_block(&self, predicate: &dyn Fn(&Block) -> bool) -> Result<Block, LedgerError> {
        let store = self.store.read();
        store
            .read_all()?
            .into_iter()
            .find(|block| predicate(block))
            .ok_or_else(|| LedgerError::NotFound {
                reference: "no block matched predicate".to_string(),
            })
    }

    fn verify_record(&self, case_id: &str) -> Result<RecordVerification, LedgerError> {
        let store = self.store.read();
        let block = store
            .read_all()?
            .into_iter()
            .find(|block| Self::payload_matches(&block.payload, case_id))
            .ok_or_else(|| LedgerError::NotFound {
                reference: format!("record {case_id}"),
            })?;

        let current_hash = seal_block(&block);
        let is_authentic = current_hash == block.hash;
        if !is_authentic {
            tracing::warn!(
                "[cc-02] ⚠ seal mismatch on block #{} for {}",
                block.index,
                case_id
            );
        }
        Ok(RecordVerification {
            is_authentic,
            original_hash: block.hash,
            current_hash,
            tampered: !is_authentic,
            timestamp: block.timestamp,
        })
    }

    fn verify_chain_integrity(&self) -> Result<ChainIntegrityReport, LedgerError> {
        let store = self.store.read();
        let blocks = store.read_all()?;
        if blocks.is_empty() {
            return Err(LedgerError::NotInitialized);
        }

        let report = audit_chain(&blocks);
        if report.is_valid {
            tracing::debug!("[cc-02] ✓ chain intact: {} blocks", report.total_blocks);
        } else {
            tracing::warn!(
                "[cc-02] ⚠ chain corrupted at indices {:?}",
                report.corrupted_blocks
            );
        }
        Ok(report)
    }

    fn chain(&self) -> Result<Vec<Block>, LedgerError> {
        Ok(self.store.read().read_all()?)
    }

    fn stats(&self) -> Result<LedgerStats, LedgerError> {
        let store = self.store.read();
        let blocks = store.read_all()?;
        let (genesis, head) = match (blocks.first(), blocks.last()) {
            (Some(genesis), Some(head)) => (genesis, head),
            _ => return Err(LedgerError::NotInitialized),
        };
        Ok(LedgerStats {
            total_blocks: blocks.len() as u64,
            genesis_hash: genesis.hash.clone(),
            head_hash: head.hash.clone(),
            head_index: head.index,
        })
    }
}
