//! Durable append-only block store: one JSON document per line.
//!
//! The whole chain is loaded into memory at open time and every append is
//! written through with an fsync before it is acknowledged. The format is
//! line-oriented so an audit can read the file with standard tools.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use shared_types::Block;

use crate::domain::errors::StoreError;
use crate::ports::outbound::BlockStore;

/// File-backed append-only block store.
#[derive(Debug)]
pub struct JsonLinesBlockStore {
    path: PathBuf,
    blocks: Vec<Block>,
}

impl JsonLinesBlockStore {
    /// Open a store file, loading any existing chain.
    ///
    /// A missing file is an empty chain; a malformed line is reported as
    /// `Corrupt` rather than silently skipped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let blocks = Self::load(&path)?;
        if blocks.is_empty() {
            tracing::info!("[cc-02] 📁 no existing ledger at {}", path.display());
        } else {
            tracing::info!(
                "[cc-02] 💾 loaded {} blocks from {}",
                blocks.len(),
                path.display()
            );
        }
        Ok(Self { path, blocks })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Vec<Block>, StoreError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::io(err)),
        };

        let mut blocks = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(StoreError::io)?;
            if line.trim().is_empty() {
                continue;
            }
            let block: Block = serde_json::from_str(&line).map_err(|err| {
                StoreError::corrupt(format!(
                    "line {} of {}: {err}",
                    line_no + 1,
                    path.display()
                ))
            })?;
            blocks.push(block);
        }
        Ok(blocks)
    }

    fn append_line(&self, block: &Block) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StoreError::io)?;
            }
        }

        let line = serde_json::to_string(block)
            .map_err(|err| StoreError::corrupt(format!("encoding block: {err}")))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(StoreError::io)?;
        file.write_all(line.as_bytes()).map_err(StoreError::io)?;
        file.write_all(b"\n").map_err(StoreError::io)?;
        file.sync_data().map_err(StoreError::io)?;
        Ok(())
    }
}

impl BlockStore for JsonLinesBlockStore {
    fn append(&mut self, block: &Block) -> Result<(), StoreError> {
        self.append_line(block)?;
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
