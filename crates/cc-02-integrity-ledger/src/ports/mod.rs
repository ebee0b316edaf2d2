//! # Ports
//!
//! Port traits for the integrity ledger.

pub mod inbound;
pub mod outbound;

pub use inbound::IntegrityLedgerApi;
pub use outbound::{BlockStore, FixedTimeSource, SystemTimeSource, TimeSource};
