//! # Domain Value Objects
//!
//! The contract status state machine.

use serde::{Deserialize, Serialize};

/// Bail contract state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    /// Amount locked, appearances pending.
    #[default]
    Locked,
    /// Every scheduled appearance verified; refund eligible.
    Active,
    /// Amount released back to the accused.
    Refunded,
    /// Amount forfeited to the court.
    ///
    /// Declared but unreachable: no transition enters this state. The entry
    /// condition (e.g. compliance below 100% at the final court date) is an
    /// open product question.
    Forfeited,
}

impl ContractStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: ContractStatus) -> bool {
        matches!(
            (self, next),
            (Self::Locked, Self::Active) | (Self::Active, Self::Refunded)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Refunded | Self::Forfeited)
    }
}
