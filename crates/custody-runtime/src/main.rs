//! # Custody-Chain Runtime
//!
//! Entry point for the custody node: boots the ledger, audits chain
//! integrity, and (optionally) fingerprints an evidence file passed on the
//! command line.
//!
//! ```text
//! custody-runtime                 # boot + integrity audit
//! custody-runtime <evidence.bin>  # boot + audit + hash a file
//! ```

use anyhow::{Context, Result};
use tracing::{error, info};

use cc_01_evidence_hashing::{
    CancellationToken, EvidenceHashingApi, FileByteSource, HashProgress, ProgressSink,
};
use cc_02_integrity_ledger::IntegrityLedgerApi;
use custody_runtime::{telemetry, CustodyContainer, RuntimeConfig};
use shared_crypto::format_digest;

/// Progress sink logging one line per hashed chunk.
struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn on_progress(&self, progress: &HashProgress) {
        info!(
            "[runtime] hashing… {}% ({}/{} bytes)",
            progress.percent_complete, progress.bytes_processed, progress.total_bytes
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let config = RuntimeConfig::from_env();
    info!("[runtime] 🚀 custody-chain starting");

    let container = CustodyContainer::build(&config).context("building custody container")?;

    let stats = container.ledger.stats().context("reading ledger stats")?;
    info!(
        "[runtime] ledger open: {} blocks, head #{} {}",
        stats.total_blocks, stats.head_index, stats.head_hash
    );

    let report = container
        .ledger
        .verify_chain_integrity()
        .context("auditing chain integrity")?;
    if !report.is_valid {
        error!(
            "[runtime] ✗ integrity audit FAILED: corrupted blocks {:?}",
            report.corrupted_blocks
        );
        anyhow::bail!(
            "ledger integrity audit failed: {} corrupted block(s)",
            report.corrupted_blocks.len()
        );
    }
    info!(
        "[runtime] ✓ integrity audit passed ({} blocks)",
        report.total_blocks
    );

    if let Some(path) = std::env::args().nth(1) {
        let source = FileByteSource::open(&path)
            .await
            .with_context(|| format!("opening evidence file {path}"))?;
        let digest = container
            .hasher
            .hash_with(&source, &LogProgressSink, &CancellationToken::new())
            .await
            .with_context(|| format!("hashing evidence file {path}"))?;
        info!(
            "[runtime] {} digest of {path} ({} bytes):",
            digest.algorithm, digest.file_size
        );
        info!("[runtime]   {}", format_digest(&digest.hash));
    }

    info!("[runtime] ready");
    Ok(())
}
