//! In-memory block store for unit tests and ephemeral deployments.

use shared_types::Block;

use crate::domain::errors::StoreError;
use crate::ports::outbound::BlockStore;

/// Block store backed by a plain vector. No durability.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBlockStore {
    blocks: Vec<Block>,
}

impl InMemoryBlockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to a stored block, for corruption-injection tests.
    ///
    /// Nothing in the ledger API reaches this; tamper scenarios go through
    /// the service's `test-utils` hooks.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn block_mut(&mut self, index: u64) -> Option<&mut Block> {
        self.blocks.get_mut(index as usize)
    }
}

impl BlockStore for InMemoryBlockStore {
    fn append(&mut self, block: &Block) -> Result<(), StoreError> {
        self.blocks.push(block.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Block>, StoreError> {
        Ok(self.blocks.clone())
    }

    fn read_range(&self, start: u64, end: u64) -> Result<Vec<Block>, StoreError> {
        let start = (start as usize).min(self.blocks.len());
        let end = (end as usize).min(self.blocks.len());
        Ok(self.blocks.get(start..end).unwrap_or_default().to_vec())
    }

    fn len(&self) -> Result<u64, StoreError> {
        Ok(self.blocks.len() as u64)
    }

    fn last(&self) -> Result<Option<Block>, StoreError> {
        Ok(self.blocks.last().cloned())
    }
}
