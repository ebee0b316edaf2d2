//! # Domain Entities
//!
//! The bail contract and the parameter/outcome types around it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::value_objects::ContractStatus;

/// A conditional-release bail contract.
///
/// Owned exclusively by the compliance service; the ledger only ever holds
/// immutable snapshots taken at mutation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceContract {
    /// Unique id, generated at creation (`BAIL-<uuid>`).
    pub transaction_id: String,
    /// Case reference; not validated against other records.
    pub case_id: String,
    /// Accused reference; not validated against other records.
    pub accused_id: String,
    /// Bail amount in whole currency units.
    pub amount: u64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Current state.
    pub status: ContractStatus,
    /// Scheduled court dates, fixed at creation, never empty.
    pub court_dates: Vec<String>,
    /// Dates with a verified appearance; grows monotonically.
    pub verified_appearances: BTreeSet<String>,
    /// Percentage of scheduled dates verified (0-100).
    pub compliance_score: u8,
    /// Derived: true once `compliance_score` reaches 100.
    pub refund_eligible: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl ComplianceContract {
    /// Recompute the compliance score from the current appearance set.
    ///
    /// `court_dates` is guaranteed non-empty at creation; the guard keeps a
    /// corrupted contract from dividing by zero.
    pub fn recompute_score(&mut self) {
        if self.court_dates.is_empty() {
            self.compliance_score = 0;
            return;
        }
        let score = 100 * self.verified_appearances.len() / self.court_dates.len();
        self.compliance_score = score.min(100) as u8;
    }

    /// Whether every scheduled appearance has been verified.
    pub fn fully_compliant(&self) -> bool {
        self.compliance_score == 100
    }
}

/// Parameters for creating a bail contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractRequest {
    /// Case reference.
    pub case_id: String,
    /// Accused reference.
    pub accused_id: String,
    /// Bail amount in whole currency units.
    pub amount: u64,
    /// Scheduled court dates; must be non-empty.
    pub court_dates: Vec<String>,
}

/// Result of a verified appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceReceipt {
    /// Compliance score after this verification.
    pub compliance_score: u8,
}

/// Result of a release attempt.
///
/// A refused release (`success == false`) is a normal outcome, not an
/// error: the contract simply has not reached full compliance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseOutcome {
    /// Whether the amount was released.
    pub success: bool,
    /// Amount released; 0 when refused.
    pub refund_amount: u64,
}
