//! # Inbound Ports (Driving Ports)
//!
//! The primary API for the evidence hashing subsystem.

use async_trait::async_trait;

use crate::domain::{CancellationToken, ContentDigest, HashComparison, HashError};
use crate::ports::outbound::{ByteSource, ProgressSink};

/// Primary API for content hashing.
///
/// Implementations must be deterministic: identical source bytes yield an
/// identical digest regardless of the configured chunk size.
#[async_trait]
pub trait EvidenceHashingApi: Send + Sync {
    /// Hash an entire byte source, reporting progress after each chunk.
    ///
    /// ## Errors
    ///
    /// - `Io`: a chunk read failed; no digest is returned
    /// - `TruncatedSource`: the source lied about its length
    /// - `Cancelled`: the token was triggered between chunks
    async fn hash_with(
        &self,
        source: &dyn ByteSource,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<ContentDigest, HashError>;

    /// Recompute the source's digest and compare it to a known hash.
    ///
    /// Both digests are normalized (whitespace stripped, uppercased) before
    /// comparison. A mismatch is reported in the result, never as an error.
    async fn verify(
        &self,
        source: &dyn ByteSource,
        known_hash: &str,
    ) -> Result<HashComparison, HashError>;
}
