//! Runtime configuration.
//!
//! Read from environment variables with safe defaults:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CUSTODY_LEDGER_PATH` | unset | JSON-lines ledger file; unset = in-memory |
//! | `CUSTODY_CHUNK_SIZE` | 5 MiB | Hasher chunk size in bytes |
//! | `CUSTODY_CURRENCY` | `INR` | Currency code for new bail contracts |

use std::path::PathBuf;

use cc_01_evidence_hashing::DEFAULT_CHUNK_SIZE;
use cc_03_bail_compliance::DEFAULT_CURRENCY;

/// Runtime configuration for the custody node.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Ledger file path; `None` keeps the chain in memory.
    pub ledger_path: Option<PathBuf>,
    /// Hasher chunk size in bytes.
    pub chunk_size: usize,
    /// Currency code for new bail contracts.
    pub currency: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            ledger_path: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ledger_path: std::env::var("CUSTODY_LEDGER_PATH").ok().map(PathBuf::from),
            chunk_size: parse_chunk_size(std::env::var("CUSTODY_CHUNK_SIZE").ok())
                .unwrap_or(defaults.chunk_size),
            currency: std::env::var("CUSTODY_CURRENCY").unwrap_or(defaults.currency),
        }
    }
}

/// Parse a chunk size override; rejects unparsable and zero values.
fn parse_chunk_size(raw: Option<String>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&size| size > 0)
}
