//! # Hashing Integration Tests
//!
//! Determinism across chunk schedules, the empty-input vector, file-backed
//! sources, and mid-flight cancellation.

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use cc_01_evidence_hashing::{
        CancellationToken, ContentHasher, EvidenceHashingApi, FileByteSource, HashError,
        HashProgress, HasherConfig, MemoryByteSource, ProgressSink,
    };
    use shared_crypto::{format_digest, sha256_hex, EMPTY_SHA256_HEX};

    fn hasher(chunk_size: usize) -> ContentHasher {
        ContentHasher::new(HasherConfig::with_chunk_size(chunk_size))
    }

    #[tokio::test]
    async fn test_empty_input_yields_standard_vector() {
        let digest = ContentHasher::default()
            .hash(&MemoryByteSource::default())
            .await
            .unwrap();
        assert_eq!(digest.hash, EMPTY_SHA256_HEX);
        assert_eq!(digest.file_size, 0);
    }

    #[tokio::test]
    async fn test_chunk_size_does_not_change_digest() {
        // Pseudo-random but fixed payload, larger than several chunk sizes.
        let payload: Vec<u8> = (0u32..50_000)
            .map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8)
            .collect();
        let source = MemoryByteSource::new(payload.clone());

        let byte_at_a_time = hasher(1).hash(&source).await.unwrap();
        let default_chunks = ContentHasher::default().hash(&source).await.unwrap();
        let odd_chunks = hasher(4_099).hash(&source).await.unwrap();

        assert_eq!(byte_at_a_time.hash, default_chunks.hash);
        assert_eq!(byte_at_a_time.hash, odd_chunks.hash);
        assert_eq!(byte_at_a_time.hash, sha256_hex(&payload));
    }

    #[tokio::test]
    async fn test_file_source_matches_memory_source() {
        let payload = b"the same bytes, two transports".to_vec();
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&payload).unwrap();
        tmp.flush().unwrap();

        let from_file = ContentHasher::default()
            .hash(&FileByteSource::open(tmp.path()).await.unwrap())
            .await
            .unwrap();
        let from_memory = ContentHasher::default()
            .hash(&MemoryByteSource::new(payload))
            .await
            .unwrap();

        assert_eq!(from_file.hash, from_memory.hash);
    }

    /// Sink that cancels its token as soon as the first chunk reports.
    struct CancelAfterFirstChunk {
        token: CancellationToken,
    }

    impl ProgressSink for CancelAfterFirstChunk {
        fn on_progress(&self, _progress: &HashProgress) {
            self.token.cancel();
        }
    }

    #[tokio::test]
    async fn test_cancellation_between_chunks_discards_progress() {
        let token = CancellationToken::new();
        let sink = CancelAfterFirstChunk {
            token: token.clone(),
        };

        // Four chunks of work; the token trips after the first.
        let source = MemoryByteSource::new(vec![0xCCu8; 4 * 1024]);
        let result = hasher(1024).hash_with(&source, &sink, &token).await;

        assert!(matches!(result, Err(HashError::Cancelled)));
    }

    #[tokio::test]
    async fn test_display_formatting_of_real_digest() {
        let digest = ContentHasher::default()
            .hash(&MemoryByteSource::new(b"warrant scan".to_vec()))
            .await
            .unwrap();

        let display = format_digest(&digest.hash);
        assert_eq!(display.split(' ').count(), 8);
        assert_eq!(display.replace(' ', ""), digest.hash);
    }
}
