//! # Inbound Ports (Driving Ports)
//!
//! The primary API for the integrity ledger.

use serde_json::Value;
use shared_types::Block;

use crate::domain::errors::LedgerError;
use crate::domain::reports::{
    AppendReceipt, ChainIntegrityReport, LedgerStats, RecordVerification,
};

/// Primary API for the integrity ledger.
///
/// This trait defines all operations available to other subsystems.
/// Implementations must guarantee at-most-one concurrent append and give
/// readers a consistent snapshot (no block is observable mid-construction).
pub trait IntegrityLedgerApi: Send + Sync {
    /// Create the genesis block if the chain is empty. Idempotent.
    fn initialize(&self) -> Result<(), LedgerError>;

    /// Append a payload as a new sealed block.
    ///
    /// The new block's position is permanent; no delete or update exists.
    ///
    /// ## Errors
    ///
    /// - `NotInitialized`: `initialize()` has not run
    /// - `Store`: the block store rejected the write
    fn append(&self, payload: Value) -> Result<AppendReceipt, LedgerError>;

    /// Linear scan for the first block matching `predicate`.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no block matched
    fn find_block(&self, predicate: &dyn Fn(&Block) -> bool) -> Result<Block, LedgerError>;

    /// Verify a single record located by its embedded case id (or
    /// transaction id) against its stored seal.
    ///
    /// A seal mismatch is reported in the result, never as an error.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no payload carries this reference
    fn verify_record(&self, case_id: &str) -> Result<RecordVerification, LedgerError>;

    /// Audit every block's seal and linkage.
    ///
    /// Corruption is reported in the result, never as an error.
    ///
    /// ## Errors
    ///
    /// - `NotInitialized`: the chain is empty
    fn verify_chain_integrity(&self) -> Result<ChainIntegrityReport, LedgerError>;

    /// Snapshot of the full chain, in order.
    fn chain(&self) -> Result<Vec<Block>, LedgerError>;

    /// Summary of the current chain.
    ///
    /// ## Errors
    ///
    /// - `NotInitialized`: the chain is empty
    fn stats(&self) -> Result<LedgerStats, LedgerError>;
}
