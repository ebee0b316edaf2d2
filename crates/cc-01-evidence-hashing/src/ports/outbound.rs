//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the hasher requires the host application to supply: a
//! readable byte source and an optional progress listener.

use async_trait::async_trait;

use crate::domain::HashProgress;

/// Abstract seekable byte source.
///
/// Production: `FileByteSource` (adapters/file.rs)
/// Testing: `MemoryByteSource` (adapters/memory.rs)
///
/// Implementations must tolerate concurrent `read_range` calls from
/// unrelated hashing operations; a read for one source must never block
/// hashing of another.
#[async_trait]
pub trait ByteSource: Send + Sync {
    /// Total length of the source in bytes.
    fn len(&self) -> u64;

    /// Whether the source is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the bytes in `[start, end)`.
    ///
    /// The range is always within `[0, len())` when called by the hasher.
    async fn read_range(&self, start: u64, end: u64) -> std::io::Result<Vec<u8>>;
}

/// Listener for per-chunk progress reports.
pub trait ProgressSink: Send + Sync {
    /// Called after each chunk is folded into the digest.
    fn on_progress(&self, progress: &HashProgress);
}

/// Progress sink that discards all reports.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn on_progress(&self, _progress: &HashProgress) {}
}
