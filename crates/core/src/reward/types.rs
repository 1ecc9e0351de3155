//! Reward confirmation.

use serde::Serialize;

use crate::account::AccountContribution;

/// Proof that an account was rewarded for a dining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardConfirmation {
    confirmation_number: String,
    account_contribution: AccountContribution,
}

impl RewardConfirmation {
    /// Creates a confirmation.
    #[must_use]
    pub fn new(confirmation_number: impl Into<String>, account_contribution: AccountContribution) -> Self {
        Self {
            confirmation_number: confirmation_number.into(),
            account_contribution,
        }
    }

    /// Unique, opaque confirmation number.
    #[must_use]
    pub fn confirmation_number(&self) -> &str {
        &self.confirmation_number
    }

    /// The contribution that was made.
    #[must_use]
    pub const fn account_contribution(&self) -> &AccountContribution {
        &self.account_contribution
    }
}
