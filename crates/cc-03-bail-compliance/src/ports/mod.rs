//! # Ports
//!
//! Port traits for bail compliance.

pub mod inbound;

pub use inbound::BailComplianceApi;
