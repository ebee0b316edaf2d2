//! # SHA-256 Hashing
//!
//! Streaming and one-shot SHA-256 helpers. Digests are rendered as
//! uppercase hex throughout the workspace.

use sha2::{Digest, Sha256};

/// Algorithm identifier recorded alongside content digests.
pub const CONTENT_HASH_ALGORITHM: &str = "SHA-256";

/// SHA-256 of the empty byte string, uppercase hex.
pub const EMPTY_SHA256_HEX: &str =
    "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855";

/// Stateful SHA-256 accumulator for chunked input.
///
/// Feeding the same bytes through any chunking yields the same digest as a
/// single [`sha256_hex`] call over the concatenation.
pub struct Sha256Stream {
    inner: Sha256,
    bytes_fed: u64,
}

impl Sha256Stream {
    /// Create a new accumulator.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
            bytes_fed: 0,
        }
    }

    /// Feed a chunk of data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self.bytes_fed += data.len() as u64;
        self
    }

    /// Total bytes fed so far.
    pub fn bytes_fed(&self) -> u64 {
        self.bytes_fed
    }

    /// Finalize and return the digest as uppercase hex.
    pub fn finalize_hex(self) -> String {
        hex::encode_upper(self.inner.finalize())
    }
}

impl Default for Sha256Stream {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot SHA-256, uppercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode_upper(Sha256::digest(data))
}

/// Group a hex digest into 8-character blocks separated by spaces.
///
/// Purely presentational; the input is not validated or normalized.
pub fn format_digest(digest: &str) -> String {
    digest
        .as_bytes()
        .chunks(8)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}
