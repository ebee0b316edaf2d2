//! # Domain
//!
//! Value types for the evidence hashing subsystem.

mod cancellation;
mod config;
mod entities;
mod errors;

pub use cancellation::CancellationToken;
pub use config::{HasherConfig, DEFAULT_CHUNK_SIZE};
pub use entities::{normalize_digest, ContentDigest, HashComparison, HashProgress};
pub use errors::HashError;
