//! # Bail Compliance Service
//!
//! Owns the live contract registry and persists every mutation as an
//! immutable snapshot appended to the integrity ledger.
//!
//! ## Concurrency
//!
//! Contract mutations hold the registry write lock for the whole
//! read/mutate/snapshot sequence; status reads clone under the read lock.
//! Lock order is always registry before ledger.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{json, Value};
use uuid::Uuid;

use cc_02_integrity_ledger::IntegrityLedgerApi;
use shared_types::records::RECORD_KIND_KEY;
use shared_types::RecordKind;

use crate::domain::{
    AppearanceReceipt, ComplianceContract, ComplianceError, ContractRequest, ContractStatus,
    ReleaseOutcome,
};
use crate::ports::inbound::BailComplianceApi;

/// Currency code applied when the composition root does not override it.
pub const DEFAULT_CURRENCY: &str = "INR";

/// The Bail Compliance Service.
pub struct BailComplianceService<L>
where
    L: IntegrityLedgerApi,
{
    ledger: Arc<L>,
    contracts: RwLock<HashMap<String, ComplianceContract>>,
    currency: String,
}

impl<L> BailComplianceService<L>
where
    L: IntegrityLedgerApi,
{
    /// Service writing snapshots to `ledger`, using [`DEFAULT_CURRENCY`].
    pub fn new(ledger: Arc<L>) -> Self {
        Self::with_currency(ledger, DEFAULT_CURRENCY)
    }

    /// Service with an explicit contract currency.
    pub fn with_currency(ledger: Arc<L>, currency: impl Into<String>) -> Self {
        Self {
            ledger,
            contracts: RwLock::new(HashMap::new()),
            currency: currency.into(),
        }
    }

    fn transition(
        contract: &mut ComplianceContract,
        next: ContractStatus,
    ) -> Result<(), ComplianceError> {
        if !contract.status.can_transition_to(next) {
            return Err(ComplianceError::InvalidTransition {
                from: contract.status,
                to: next,
            });
        }
        contract.status = next;
        Ok(())
    }

    /// Immutable ledger snapshot of a contract, tagged with `kind`.
    fn snapshot_payload(kind: RecordKind, contract: &ComplianceContract) -> Value {
        json!({
            RECORD_KIND_KEY: kind.tag(),
            "transaction_id": contract.transaction_id,
            "case_id": contract.case_id,
            "accused_id": contract.accused_id,
            "amount": contract.amount,
            "currency": contract.currency,
            "status": contract.status,
            "court_dates": contract.court_dates,
            "verified_appearances": contract.verified_appearances,
            "compliance_score": contract.compliance_score,
            "refund_eligible": contract.refund_eligible,
        })
    }
}

impl<L> BailComplianceApi for BailComplianceService<L>
where
    L: IntegrityLedgerApi,
{
    fn create_contract(
        &self,
        request: ContractRequest,
    ) -> Result<ComplianceContract, ComplianceError> {
        if request.court_dates.is_empty() {
            return Err(ComplianceError::NoCourtDates);
        }

        let contract = ComplianceContract {
            transaction_id: format!("BAIL-{}", Uuid::new_v4()),
            case_id: request.case_id,
            accused_id: request.accused_id,
            amount: request.amount,
            currency: self.currency.clone(),
            status: ContractStatus::Locked,
            court_dates: request.court_dates,
            verified_appearances: BTreeSet::new(),
            compliance_score: 0,
            refund_eligible: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        self.ledger
            .append(Self::snapshot_payload(RecordKind::BailContract, &contract))?;
        self.contracts
            .write()
            .insert(contract.transaction_id.clone(), contract.clone());

        tracing::info!(
            "[cc-03] 🔒 contract {} locked: {} {} against {} court dates",
            contract.transaction_id,
            contract.amount,
            contract.currency,
            contract.court_dates.len()
        );
        Ok(contract)
    }

    fn verify_appearance(
        &self,
        transaction_id: &str,
        date: &str,
        biometric_proof: Value,
    ) -> Result<AppearanceReceipt, ComplianceError> {
        let mut contracts = self.contracts.write();
        let contract =
            contracts
                .get_mut(transaction_id)
                .ok_or_else(|| ComplianceError::UnknownTransaction {
                    transaction_id: transaction_id.to_string(),
                })?;

        // Set semantics make repeat verifications of the same date no-ops;
        // only a genuinely new date mutates the contract and hits the ledger.
        if contract.verified_appearances.insert(date.to_string()) {
            contract.recompute_score();
            if contract.fully_compliant() && contract.status == ContractStatus::Locked {
                Self::transition(contract, ContractStatus::Active)?;
                contract.refund_eligible = true;
                tracing::info!(
                    "[cc-03] ✓ contract {} fully compliant, refund unlocked",
                    transaction_id
                );
            }

            let mut payload =
                Self::snapshot_payload(RecordKind::AppearanceVerification, contract);
            payload["appearance_date"] = json!(date);
            payload["biometric_attestation"] = biometric_proof;
            self.ledger.append(payload)?;
        }

        Ok(AppearanceReceipt {
            compliance_score: contract.compliance_score,
        })
    }

    fn release(&self, transaction_id: &str) -> Result<ReleaseOutcome, ComplianceError> {
        let mut contracts = self.contracts.write();
        let contract =
            contracts
                .get_mut(transaction_id)
                .ok_or_else(|| ComplianceError::UnknownTransaction {
                    transaction_id: transaction_id.to_string(),
                })?;

        if !contract.fully_compliant()
            || !contract.status.can_transition_to(ContractStatus::Refunded)
        {
            tracing::info!(
                "[cc-03] release refused for {}: score {}, status {:?}",
                transaction_id,
                contract.compliance_score,
                contract.status
            );
            return Ok(ReleaseOutcome {
                success: false,
                refund_amount: 0,
            });
        }

        Self::transition(contract, ContractStatus::Refunded)?;
        let mut payload = Self::snapshot_payload(RecordKind::BailRefund, contract);
        payload["refund_amount"] = json!(contract.amount);
        self.ledger.append(payload)?;

        tracing::info!(
            "[cc-03] 💸 contract {} refunded: {} {}",
            transaction_id,
            contract.amount,
            contract.currency
        );
        Ok(ReleaseOutcome {
            success: true,
            refund_amount: contract.amount,
        })
    }

    fn get_status(&self, transaction_id: &str) -> Option<ComplianceContract> {
        self.contracts.read().get(transaction_id).cloned()
    }
}
