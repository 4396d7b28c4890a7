//! State records: `/eth/v1/beacon/states/{state_id}/...`.

use serde::{Deserialize, Serialize};

/// A hash tree root, as returned by the `root` endpoints of states and blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Root {
    pub root: String,
}

/// The fork schedule entry active in a state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fork {
    pub previous_version: String,
    pub current_version: String,
    /// Epoch at which `current_version` became active.
    pub epoch: String,
}

/// An `(epoch, root)` pair identifying a checkpoint block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Checkpoint {
    pub epoch: String,
    pub root: String,
}

/// The justification and finalization checkpoints of a state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalityCheckpoints {
    pub previous_justified: Checkpoint,
    pub current_justified: Checkpoint,
    pub finalized: Checkpoint,
}

/// Lifecycle status of a validator.
///
/// Serialises as a lowercase snake_case string (e.g. `"pending_initialized"`).
/// The declaration order follows the validator lifecycle and is the order
/// used when several statuses are sent as a query filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorStatus {
    /// Deposit processed, not yet eligible for activation.
    PendingInitialized,
    /// Eligible and waiting in the activation queue.
    PendingQueued,
    /// Active and not scheduled to exit.
    ActiveOngoing,
    /// Active and scheduled to exit.
    ActiveExiting,
    /// Active but slashed, scheduled to exit.
    ActiveSlashed,
    /// Exited without being slashed, not yet withdrawable.
    ExitedUnslashed,
    /// Exited after being slashed, not yet withdrawable.
    ExitedSlashed,
    /// Withdrawable epoch reached, balance not yet withdrawn.
    WithdrawalPossible,
    /// Balance fully withdrawn.
    WithdrawalDone,
}

impl ValidatorStatus {
    /// Every status, in declaration order.
    pub const ALL: [ValidatorStatus; 9] = [
        ValidatorStatus::PendingInitialized,
        ValidatorStatus::PendingQueued,
        ValidatorStatus::ActiveOngoing,
        ValidatorStatus::ActiveExiting,
        ValidatorStatus::ActiveSlashed,
        ValidatorStatus::ExitedUnslashed,
        ValidatorStatus::ExitedSlashed,
        ValidatorStatus::WithdrawalPossible,
        ValidatorStatus::WithdrawalDone,
    ];

    /// The wire-format string (e.g. `"active_ongoing"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorStatus::PendingInitialized => "pending_initialized",
            ValidatorStatus::PendingQueued => "pending_queued",
            ValidatorStatus::ActiveOngoing => "active_ongoing",
            ValidatorStatus::ActiveExiting => "active_exiting",
            ValidatorStatus::ActiveSlashed => "active_slashed",
            ValidatorStatus::ExitedUnslashed => "exited_unslashed",
            ValidatorStatus::ExitedSlashed => "exited_slashed",
            ValidatorStatus::WithdrawalPossible => "withdrawal_possible",
            ValidatorStatus::WithdrawalDone => "withdrawal_done",
        }
    }
}

/// Formats the status as its wire-format string.
impl std::fmt::Display for ValidatorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a [`ValidatorStatus`] from its wire-format string.
impl std::str::FromStr for ValidatorStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidatorStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown validator status {:?}; expected one of: {}",
                    s,
                    ValidatorStatus::ALL.map(|st| st.as_str()).join(", ")
                )
            })
    }
}

/// The registry entry of a validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Validator {
    /// BLS public key, `0x`-prefixed hex.
    pub pubkey: String,
    pub withdrawal_credentials: String,
    /// Effective balance in gwei.
    pub effective_balance: String,
    pub slashed: bool,
    pub activation_eligibility_epoch: String,
    pub activation_epoch: String,
    pub exit_epoch: String,
    pub withdrawable_epoch: String,
}

/// A validator as seen from a particular state.
///
/// Every field is optional: nodes omit what they cannot compute for the
/// requested state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateValidator {
    /// Index of the validator in the validator registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,

    /// Current validator balance in gwei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ValidatorStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,
}
