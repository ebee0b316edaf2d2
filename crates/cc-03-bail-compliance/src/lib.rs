//! # CC-03 Bail Compliance
//!
//! Conditional-release (bail) contracts as a ledger-backed state machine.
//!
//! **Subsystem ID:** 3
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Track a bail amount locked against scheduled court appearances:
//! - `Locked → Active` once every scheduled appearance is verified
//! - `Active → Refunded` when the amount is released
//! - `Forfeited` is declared but has no inbound transition (its entry
//!   condition is an open product question)
//!
//! Every contract mutation is persisted as an immutable snapshot appended
//! to the integrity ledger; the live contract is owned exclusively by this
//! subsystem.
//!
//! ## State Machine
//!
//! ```text
//! create ──→ LOCKED ──100% appearances──→ ACTIVE ──release──→ REFUNDED
//!                                            │
//!                                            └─release at <100%: refused,
//!                                              state unchanged
//! ```

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    AppearanceReceipt, ComplianceContract, ComplianceError, ContractRequest, ContractStatus,
    ReleaseOutcome,
};
pub use ports::BailComplianceApi;
pub use service::{BailComplianceService, DEFAULT_CURRENCY};
