//! # Domain Entities
//!
//! Progress reports, finished digests, and comparison outcomes.

use serde::{Deserialize, Serialize};
use shared_crypto::CONTENT_HASH_ALGORITHM;

/// Progress snapshot emitted after each hashed chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashProgress {
    /// Bytes hashed so far.
    pub bytes_processed: u64,
    /// Total bytes in the source.
    pub total_bytes: u64,
    /// `round(100 * bytes_processed / total_bytes)`; 100 for empty sources.
    pub percent_complete: u8,
}

impl HashProgress {
    /// Build a progress snapshot, computing the rounded percentage.
    pub fn new(bytes_processed: u64, total_bytes: u64) -> Self {
        let percent_complete = if total_bytes == 0 {
            100
        } else {
            ((bytes_processed as f64 * 100.0 / total_bytes as f64).round()) as u8
        };
        Self {
            bytes_processed,
            total_bytes,
            percent_complete,
        }
    }
}

/// Finished content digest.
///
/// Only complete digests exist: a failed or cancelled run returns an error,
/// never a partial hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDigest {
    /// Hash algorithm identifier.
    pub algorithm: String,
    /// Uppercase hex digest of the full byte stream.
    pub hash: String,
    /// Size of the hashed source in bytes.
    pub file_size: u64,
    /// RFC 3339 timestamp of digest completion.
    pub timestamp: String,
    /// Always true; present for record-format compatibility.
    pub is_complete: bool,
}

impl ContentDigest {
    /// Build a completed digest record.
    pub fn new(hash: String, file_size: u64, timestamp: String) -> Self {
        Self {
            algorithm: CONTENT_HASH_ALGORITHM.to_string(),
            hash,
            file_size,
            timestamp,
            is_complete: true,
        }
    }
}

/// Outcome of comparing a recomputed digest against a known one.
///
/// A mismatch is a normal, non-exceptional outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashComparison {
    /// Whether the normalized digests are equal.
    pub is_match: bool,
    /// Digest recomputed from the source, normalized.
    pub computed_hash: String,
    /// Known digest supplied by the caller, normalized.
    pub known_hash: String,
}

/// Normalize a digest for comparison: strip whitespace, uppercase.
pub fn normalize_digest(digest: &str) -> String {
    digest
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}
