//! # CC-01 Evidence Hashing
//!
//! Streaming content hashing for evidence files.
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Fingerprint arbitrarily large files (CCTV footage, call recordings,
//! document scans) without ever holding more than one chunk in memory:
//! - Chunked SHA-256 streaming with progress reporting
//! - Cooperative cancellation between chunks
//! - Digest comparison with case/whitespace normalization
//!
//! ## Guarantees
//!
//! | Guarantee | Description |
//! |-----------|-------------|
//! | Determinism | Identical bytes hash identically for any chunk size |
//! | Bounded memory | At most one chunk resident at a time |
//! | No partial digests | Failure or cancellation never yields a hash |
//! | Cooperative scheduling | Every chunk boundary is a suspension point |
//!
//! ## Module Structure
//!
//! ```text
//! cc-01-evidence-hashing/
//! ├── domain/          # Progress, digest, config, cancellation, errors
//! ├── ports/           # EvidenceHashingApi, ByteSource, ProgressSink
//! ├── adapters/        # File and in-memory byte sources
//! └── service.rs       # ContentHasher
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{FileByteSource, MemoryByteSource};
pub use domain::{
    CancellationToken, ContentDigest, HashComparison, HashError, HashProgress, HasherConfig,
    DEFAULT_CHUNK_SIZE,
};
pub use ports::{ByteSource, EvidenceHashingApi, NullProgressSink, ProgressSink};
pub use service::ContentHasher;

// Digest display formatting lives with the hash primitives.
pub use shared_crypto::format_digest;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
