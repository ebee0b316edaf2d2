//! Cross-subsystem integration tests.

mod bail_compliance;
mod chain_integrity;
mod evidence_flow;
mod hashing;
mod persistence;
