//! # Shared Crypto
//!
//! The hashing function family used across Custody-Chain:
//!
//! - [`hashing`] - streaming SHA-256 accumulator and one-shot helpers used
//!   by the content hasher (cc-01)
//! - [`seal`] - the domain-separated two-pass digest that seals ledger
//!   blocks (cc-02)
//! - [`canonical`] - canonical JSON serialization feeding the seal preimage
//!
//! Every digest in this workspace is SHA-256 based; the seal adds a second
//! pass over the first digest plus a fixed domain-separation constant so a
//! block seal can never collide with a plain content hash of the same bytes.

pub mod canonical;
pub mod hashing;
pub mod seal;

pub use canonical::canonical_json;
pub use hashing::{
    format_digest, sha256_hex, Sha256Stream, CONTENT_HASH_ALGORITHM, EMPTY_SHA256_HEX,
};
pub use seal::{ledger_seal, is_sealed_digest, SEAL_DOMAIN_TAG, SEAL_FORMAT_TAG};
