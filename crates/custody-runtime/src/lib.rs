//! # Custody-Chain Runtime
//!
//! Composition root for the Custody-Chain evidence ledger.
//!
//! ## Modular Structure
//!
//! - `config` - Runtime configuration from environment variables
//! - `container` - Subsystem container with dependency injection
//! - `telemetry` - Tracing/logging setup
//!
//! ## Startup Sequence
//!
//! 1. Initialize structured logging
//! 2. Load configuration from the environment
//! 3. Open the configured block store (in-memory or JSON-lines file)
//! 4. Create the genesis block (if not exists)
//! 5. Run the chain integrity audit
//! 6. Signal ready
//!
//! The ledger instance is owned here and handed to the compliance and
//! verification subsystems by reference-counted handle; there is no
//! ambient/global chain state anywhere in the workspace.

pub mod config;
pub mod container;
pub mod telemetry;

pub use config::RuntimeConfig;
pub use container::{CustodyContainer, Ledger};
