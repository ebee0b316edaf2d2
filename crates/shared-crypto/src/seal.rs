//! # Ledger Seal
//!
//! The digest that seals an integrity-ledger block. Two SHA-256 passes:
//! the block's canonical preimage is hashed, then the hex digest plus a
//! fixed domain-separation constant is hashed again. The result is prefixed
//! with a format tag so stored hashes are self-describing.
//!
//! Both constants are non-secret but fixed: changing either invalidates
//! every previously sealed block. The second pass exists for domain
//! separation only and adds no other cryptographic property beyond SHA-256.

use crate::hashing::sha256_hex;

/// Domain-separation constant mixed into the second pass.
pub const SEAL_DOMAIN_TAG: &str = "custody-chain/ledger-seal/v1";

/// Format tag prefixed to every sealed digest.
pub const SEAL_FORMAT_TAG: &str = "cc1";

/// Seal a canonical block preimage.
///
/// Returns `"<format-tag>:<uppercase-hex>"`.
pub fn ledger_seal(canonical_preimage: &str) -> String {
    let first = sha256_hex(canonical_preimage.as_bytes());
    let second = sha256_hex(format!("{first}{SEAL_DOMAIN_TAG}").as_bytes());
    format!("{SEAL_FORMAT_TAG}:{second}")
}

/// Whether `digest` carries the sealed-digest format tag.
pub fn is_sealed_digest(digest: &str) -> bool {
    digest
        .strip_prefix(SEAL_FORMAT_TAG)
        .and_then(|rest| rest.strip_prefix(':'))
        .is_some_and(|hex_part| {
            hex_part.len() == 64 && hex_part.bytes().all(|b| b.is_ascii_hexdigit())
        })
}
