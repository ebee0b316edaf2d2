//! File-backed byte source using async I/O.

use std::io::SeekFrom;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio::sync::Mutex;

use crate::ports::outbound::ByteSource;

/// Byte source backed by a file on disk.
///
/// The length is captured at open time; files must not be mutated while a
/// hash is in flight. Reads seek per range, so a single open handle serves
/// arbitrary chunk schedules.
pub struct FileByteSource {
    file: Mutex<File>,
    len: u64,
}

impl FileByteSource {
    /// Open a file and capture its length.
    pub async fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::open(path).await?;
        let len = file.metadata().await?.len();
        Ok(Self {
            file: Mutex::new(file),
            len,
        })
    }
}

#[async_trait]
impl ByteSource for FileByteSource {
    fn len(&self) -> u64 {
        self.len
    }

    async fn read_range(&self, start: u64, end: u64) -> std::io::Result<Vec<u8>> {
        let mut buf = vec![0u8; (end.saturating_sub(start)) as usize];
        let mut file = self.file.lock().await;
        file.seek(SeekFrom::Start(start)).await?;
        file.read_exact(&mut buf).await?;
        Ok(buf)
    }
}
