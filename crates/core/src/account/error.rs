//! Account error types.

use rust_decimal::Decimal;
use thiserror::Error;

use rewards_shared::{AccountId, AppError, MonetaryAmount};

use crate::persistence::PersistenceError;

/// Errors raised by the account aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Beneficiary names are unique within an account.
    #[error("Beneficiary '{0}' already exists")]
    DuplicateBeneficiary(String),

    /// No beneficiary with this name.
    #[error("Beneficiary '{0}' not found")]
    BeneficiaryNotFound(String),

    /// Allocation percentages would sum above 100%.
    #[error("Allocation percentages would total {total}, which exceeds 1")]
    AllocationExceedsTotal {
        /// The rejected total, as a ratio.
        total: Decimal,
    },

    /// Allocation percentages must cover exactly 100% after a rebalance.
    #[error("Allocation percentages total {total} instead of 1")]
    InvalidAllocation {
        /// The rejected total, as a ratio.
        total: Decimal,
    },

    /// Nothing to allocate to: no beneficiaries or 0% total allocation.
    #[error("Account {account_number} has no allocation targets")]
    NoAllocationTargets {
        /// The account that could not be rewarded.
        account_number: String,
    },

    /// Benefits are never negative.
    #[error("Cannot allocate a negative benefit of {0}")]
    NegativeBenefit(MonetaryAmount),

    /// Rounding the leading shares up left a negative remainder for the last
    /// beneficiary.
    #[error("Distribution to beneficiary '{name}' would be {amount}")]
    NegativeDistribution {
        /// Beneficiary name.
        name: String,
        /// The rejected distribution.
        amount: MonetaryAmount,
    },
}

/// Errors raised by an `AccountManager`.
#[derive(Debug, Error)]
pub enum AccountManagerError {
    /// No account with this id.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// The change violates an account invariant.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// The store failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl From<AccountManagerError> for AppError {
    fn from(err: AccountManagerError) -> Self {
        let message = err.to_string();
        match err {
            AccountManagerError::AccountNotFound(_) => Self::NotFound(message),
            AccountManagerError::Account(AccountError::DuplicateBeneficiary(_)) => {
                Self::Conflict(message)
            }
            AccountManagerError::Account(AccountError::BeneficiaryNotFound(_)) => {
                Self::NotFound(message)
            }
            AccountManagerError::Account(_) => Self::Validation(message),
            AccountManagerError::Persistence(_) => Self::Persistence(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_error_mapping() {
        let duplicate: AppError =
            AccountManagerError::Account(AccountError::DuplicateBeneficiary("A".into())).into();
        assert_eq!(duplicate.error_code(), "CONFLICT");

        let missing: AppError =
            AccountManagerError::AccountNotFound(AccountId::new()).into();
        assert_eq!(missing.error_code(), "NOT_FOUND");
    }
}
