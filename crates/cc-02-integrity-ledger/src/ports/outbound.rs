//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the ledger service: a block store and a clock.

use shared_types::Block;

use crate::domain::errors::StoreError;

/// Abstract append-only block store.
///
/// Production: `JsonLinesBlockStore` (adapters/jsonl.rs)
/// Testing: `InMemoryBlockStore` (adapters/memory.rs)
///
/// Implementations persist blocks in append order; nothing in this port can
/// remove or rewrite a block. The verification algorithm is independent of
/// the store chosen.
pub trait BlockStore: Send + Sync {
    /// Append a sealed block after the current tail.
    fn append(&mut self, block: &Block) -> Result<(), StoreError>;

    /// Read the full chain in order.
    fn read_all(&self) -> Result<Vec<Block>, StoreError>;

    /// Read blocks with `start <= index < end`, in order.
    fn read_range(&self, start: u64, end: u64) -> Result<Vec<Block>, StoreError>;

    /// Number of stored blocks.
    fn len(&self) -> Result<u64, StoreError>;

    /// Whether the store holds no blocks.
    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// The newest block, if any.
    fn last(&self) -> Result<Option<Block>, StoreError>;
}

impl<S: BlockStore + ?Sized> BlockStore for Box<S> {
    fn append(&mut self, block: &Block) -> Result<(), StoreError> {
        (**self).append(block)
    }

    fn read_all(&self) -> Result<Vec<Block>, StoreError> {
        (**self).read_all()
    }

    fn read_range(&self, start: u64, end: u64) -> Result<Vec<Block>, StoreError> {
        (**self).read_range(start, end)
    }

    fn len(&self) -> Result<u64, StoreError> {
        (**self).len()
    }

    fn last(&self) -> Result<Option<Block>, StoreError> {
        (**self).last()
    }
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current wall-clock time as an RFC 3339 string.
    fn now(&self) -> String;
}

/// Default time source using the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> String {
        chrono::Utc::now().to_rfc3339()
    }
}

/// Fixed time source for deterministic tests.
#[derive(Clone, Debug)]
pub struct FixedTimeSource {
    timestamp: String,
}

impl FixedTimeSource {
    /// Source that always reports `timestamp`.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> String {
        self.timestamp.clone()
    }
}
