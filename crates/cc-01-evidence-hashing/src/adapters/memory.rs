//! In-memory byte source for tests and small payloads.

use async_trait::async_trait;

use crate::ports::outbound::ByteSource;

/// Byte source backed by an owned buffer.
#[derive(Clone, Debug, Default)]
pub struct MemoryByteSource {
    bytes: Vec<u8>,
}

impl MemoryByteSource {
    /// Wrap a buffer.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl ByteSource for MemoryByteSource {
    fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    async fn read_range(&self, start: u64, end: u64) -> std::io::Result<Vec<u8>> {
        let (start, end) = (start as usize, end as usize);
        self.bytes
            .get(start..end)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("range {start}..{end} outside source of {}", self.bytes.len()),
                )
            })
    }
}
