//! Reward error types.

use thiserror::Error;

use rewards_shared::{AppError, FormatError};

use crate::account::AccountError;
use crate::persistence::PersistenceError;
use crate::restaurant::RestaurantError;

/// Errors surfaced by `RewardNetwork::reward_account_for`.
///
/// Whatever the variant, no savings change and no confirmation is recorded.
#[derive(Debug, Error)]
pub enum RewardError {
    /// Malformed amount or percentage.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The restaurant's policy does not apply to this dining.
    #[error("Benefit policy not applicable: dining merchant {actual}, restaurant {expected}")]
    PolicyNotApplicable {
        /// Restaurant merchant number.
        expected: String,
        /// Dining merchant number.
        actual: String,
    },

    /// The account has no beneficiary with a non-zero share.
    #[error("Account {account_number} has no allocation targets")]
    NoAllocationTargets {
        /// The account that could not be rewarded.
        account_number: String,
    },

    /// No account for the credit card.
    #[error("No account for credit card {0}")]
    AccountNotFound(String),

    /// No restaurant for the merchant number.
    #[error("No restaurant for merchant number {0}")]
    RestaurantNotFound(String),

    /// Any other account invariant violation.
    #[error(transparent)]
    Account(AccountError),

    /// Any other restaurant data problem.
    #[error(transparent)]
    Restaurant(RestaurantError),

    /// A storage collaborator failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl From<AccountError> for RewardError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NoAllocationTargets { account_number } => {
                Self::NoAllocationTargets { account_number }
            }
            other => Self::Account(other),
        }
    }
}

impl From<RestaurantError> for RewardError {
    fn from(err: RestaurantError) -> Self {
        match err {
            RestaurantError::PolicyNotApplicable { expected, actual } => {
                Self::PolicyNotApplicable { expected, actual }
            }
            other => Self::Restaurant(other),
        }
    }
}

impl From<RewardError> for AppError {
    fn from(err: RewardError) -> Self {
        let message = err.to_string();
        match err {
            RewardError::Format(_) => Self::Validation(message),
            RewardError::AccountNotFound(_) | RewardError::RestaurantNotFound(_) => {
                Self::NotFound(message)
            }
            RewardError::PolicyNotApplicable { .. }
            | RewardError::NoAllocationTargets { .. }
            | RewardError::Account(_) => Self::BusinessRule(message),
            RewardError::Restaurant(_) => Self::Internal(message),
            RewardError::Persistence(_) => Self::Persistence(message),
        }
    }
}
