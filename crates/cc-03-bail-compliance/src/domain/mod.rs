//! # Domain
//!
//! Contracts, the status state machine, operation outcomes, and errors.

mod entities;
mod errors;
mod value_objects;

pub use entities::{AppearanceReceipt, ComplianceContract, ContractRequest, ReleaseOutcome};
pub use errors::ComplianceError;
pub use value_objects::ContractStatus;
