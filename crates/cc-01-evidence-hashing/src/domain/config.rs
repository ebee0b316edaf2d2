//! Hasher configuration.

/// Default chunk size: 5 MiB.
pub const DEFAULT_CHUNK_SIZE: usize = 5 * 1024 * 1024;

/// Configuration for the content hasher.
#[derive(Clone, Copy, Debug)]
pub struct HasherConfig {
    /// Bytes read per chunk. Must be at least 1.
    pub chunk_size: usize,
}

impl HasherConfig {
    /// Config with an explicit chunk size; values below 1 are clamped to 1.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
