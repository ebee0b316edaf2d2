//! # Inbound Ports (Driving Ports)
//!
//! The primary API for bail compliance.

use serde_json::Value;

use crate::domain::{
    AppearanceReceipt, ComplianceContract, ComplianceError, ContractRequest, ReleaseOutcome,
};

/// Primary API for bail compliance contracts.
pub trait BailComplianceApi: Send + Sync {
    /// Create a bail contract in the `Locked` state and persist its
    /// creation snapshot to the ledger.
    ///
    /// ## Errors
    ///
    /// - `NoCourtDates`: `court_dates` is empty
    /// - `Ledger`: the snapshot append failed
    fn create_contract(
        &self,
        request: ContractRequest,
    ) -> Result<ComplianceContract, ComplianceError>;

    /// Record a verified court appearance.
    ///
    /// Idempotent per date: verifying the same date twice never
    /// double-counts. The `biometric_proof` is accepted as an opaque
    /// attestation and recorded, not checked, here.
    ///
    /// ## Errors
    ///
    /// - `UnknownTransaction`: no contract with this id
    /// - `Ledger`: the appearance record append failed
    fn verify_appearance(
        &self,
        transaction_id: &str,
        date: &str,
        biometric_proof: Value,
    ) -> Result<AppearanceReceipt, ComplianceError>;

    /// Release the bail amount if the contract is fully compliant.
    ///
    /// A refusal (`success == false`, amount 0) is a normal outcome; the
    /// contract state is left unchanged.
    ///
    /// ## Errors
    ///
    /// - `UnknownTransaction`: no contract with this id
    /// - `Ledger`: the refund record append failed
    fn release(&self, transaction_id: &str) -> Result<ReleaseOutcome, ComplianceError>;

    /// Current contract snapshot, or `None` for unknown ids.
    fn get_status(&self, transaction_id: &str) -> Option<ComplianceContract>;
}
