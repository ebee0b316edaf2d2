//! Subsystem container with dependency injection.
//!
//! Builds the ledger over the configured store and hands shared handles to
//! the compliance and verification subsystems.

use std::sync::Arc;

use cc_01_evidence_hashing::{ContentHasher, HasherConfig};
use cc_02_integrity_ledger::{
    BlockStore, InMemoryBlockStore, IntegrityLedgerApi, IntegrityLedgerService,
    JsonLinesBlockStore, LedgerError, SystemTimeSource,
};
use cc_03_bail_compliance::BailComplianceService;
use cc_04_verification::VerificationService;

use crate::config::RuntimeConfig;

/// Concrete ledger type assembled by the runtime.
pub type Ledger = IntegrityLedgerService<Box<dyn BlockStore>, SystemTimeSource>;

/// All wired subsystems.
pub struct CustodyContainer {
    /// The integrity ledger (cc-02), shared by the other subsystems.
    pub ledger: Arc<Ledger>,
    /// The content hasher (cc-01).
    pub hasher: ContentHasher,
    /// Bail compliance contracts (cc-03).
    pub compliance: BailComplianceService<Ledger>,
    /// Evidence verification (cc-04).
    pub verification: VerificationService<Ledger>,
}

impl CustodyContainer {
    /// Wire every subsystem according to `config`.
    ///
    /// Opens (or creates) the block store, ensures the genesis block
    /// exists, and shares the ledger handle with cc-03 and cc-04.
    pub fn build(config: &RuntimeConfig) -> Result<Self, LedgerError> {
        let store: Box<dyn BlockStore> = match &config.ledger_path {
            Some(path) => {
                tracing::info!("[runtime] opening ledger store at {}", path.display());
                Box::new(JsonLinesBlockStore::open(path)?)
            }
            None => {
                tracing::info!("[runtime] using in-memory ledger store (no durability)");
                Box::new(InMemoryBlockStore::new())
            }
        };

        let ledger = Arc::new(IntegrityLedgerService::new(store, SystemTimeSource));
        ledger.initialize()?;

        let hasher = ContentHasher::new(HasherConfig::with_chunk_size(config.chunk_size));
        let compliance =
            BailComplianceService::with_currency(Arc::clone(&ledger), config.currency.clone());
        let verification = VerificationService::new(hasher, Arc::clone(&ledger));

        Ok(Self {
            ledger,
            hasher,
            compliance,
            verification,
        })
    }
}
