//! # Content Hasher Service
//!
//! Streams a byte source through the shared SHA-256 accumulator one chunk
//! at a time. Each chunk boundary is a suspension point: the task yields to
//! the scheduler and checks for cancellation before the next read, so a
//! multi-gigabyte hash never starves unrelated work.

use async_trait::async_trait;
use shared_crypto::Sha256Stream;

use crate::domain::{
    normalize_digest, CancellationToken, ContentDigest, HashComparison, HashError, HashProgress,
    HasherConfig,
};
use crate::ports::inbound::EvidenceHashingApi;
use crate::ports::outbound::{ByteSource, NullProgressSink, ProgressSink};

/// The content hashing service.
///
/// Stateless apart from its configuration; a single instance serves any
/// number of concurrent hashing operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContentHasher {
    config: HasherConfig,
}

impl ContentHasher {
    /// Create a hasher with the given configuration.
    pub fn new(config: HasherConfig) -> Self {
        Self { config }
    }

    /// Configured chunk size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    /// Hash a source without progress reporting or cancellation.
    pub async fn hash(&self, source: &dyn ByteSource) -> Result<ContentDigest, HashError> {
        self.hash_with(source, &NullProgressSink, &CancellationToken::new())
            .await
    }
}

#[async_trait]
impl EvidenceHashingApi for ContentHasher {
    async fn hash_with(
        &self,
        source: &dyn ByteSource,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<ContentDigest, HashError> {
        let total = source.len();
        let chunk_size = self.config.chunk_size as u64;
        tracing::debug!(
            "[cc-01] hashing source: {} bytes, {} byte chunks",
            total,
            chunk_size
        );

        let mut stream = Sha256Stream::new();
        let mut processed: u64 = 0;

        while processed < total {
            if cancel.is_cancelled() {
                tracing::debug!("[cc-01] hash cancelled at {}/{} bytes", processed, total);
                return Err(HashError::Cancelled);
            }

            let start = processed;
            let end = (start + chunk_size).min(total);
            let chunk = source.read_range(start, end).await?;
            if chunk.len() as u64 != end - start {
                return Err(HashError::TruncatedSource {
                    offset: start,
                    expected: end - start,
                    got: chunk.len() as u64,
                });
            }

            stream.update(&chunk);
            processed = end;
            progress.on_progress(&HashProgress::new(processed, total));

            // Chunk boundary: let other tasks run before the next read.
            tokio::task::yield_now().await;
        }

        let digest = ContentDigest::new(
            stream.finalize_hex(),
            total,
            chrono::Utc::now().to_rfc3339(),
        );
        tracing::debug!("[cc-01] ✓ digest complete: {} bytes", total);
        Ok(digest)
    }

    async fn verify(
        &self,
        source: &dyn ByteSource,
        known_hash: &str,
    ) -> Result<HashComparison, HashError> {
        let digest = self.hash(source).await?;
        let computed_hash = normalize_digest(&digest.hash);
        let known_hash = normalize_digest(known_hash);
        Ok(HashComparison {
            is_match: computed_hash == known_hash,
            computed_hash,
            known_hash,
        })
    }
}
