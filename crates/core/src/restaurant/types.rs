//! Restaurant and its benefit terms.

use serde::{Deserialize, Serialize};

use rewards_shared::{MonetaryAmount, Percentage};

use super::error::RestaurantError;
use super::policy::BenefitAvailabilityPolicy;
use crate::account::Account;
use crate::dining::Dining;

/// A merchant in the rewards network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    merchant_number: String,
    name: String,
    benefit_percentage: Percentage,
    benefit_availability_policy: BenefitAvailabilityPolicy,
}

impl Restaurant {
    /// Creates a restaurant whose benefit is always available.
    #[must_use]
    pub fn new(
        merchant_number: impl Into<String>,
        name: impl Into<String>,
        benefit_percentage: Percentage,
    ) -> Self {
        Self {
            merchant_number: merchant_number.into(),
            name: name.into(),
            benefit_percentage,
            benefit_availability_policy: BenefitAvailabilityPolicy::Always,
        }
    }

    /// Replaces the availability policy.
    #[must_use]
    pub fn with_availability_policy(mut self, policy: BenefitAvailabilityPolicy) -> Self {
        self.benefit_availability_policy = policy;
        self
    }

    /// Merchant number charges are reported under.
    #[must_use]
    pub fn merchant_number(&self) -> &str {
        &self.merchant_number
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Share of the dining amount paid out as benefit.
    #[must_use]
    pub const fn benefit_percentage(&self) -> Percentage {
        self.benefit_percentage
    }

    /// When a benefit is paid out at all.
    #[must_use]
    pub const fn benefit_availability_policy(&self) -> BenefitAvailabilityPolicy {
        self.benefit_availability_policy
    }

    /// Computes the benefit earned by `account` for `dining`.
    ///
    /// The benefit is `dining.amount × benefit_percentage`, rounded half-up to
    /// the cent, or zero when the availability policy withholds it.
    ///
    /// # Errors
    ///
    /// Returns `RestaurantError::PolicyNotApplicable` if the dining was not
    /// charged by this restaurant.
    pub fn compute_benefit(
        &self,
        account: &Account,
        dining: &Dining,
    ) -> Result<MonetaryAmount, RestaurantError> {
        if dining.merchant_number() != self.merchant_number {
            return Err(RestaurantError::PolicyNotApplicable {
                expected: self.merchant_number.clone(),
                actual: dining.merchant_number().to_string(),
            });
        }

        if self
            .benefit_availability_policy
            .is_benefit_available_for(account, dining)
        {
            Ok(dining.amount().multiply_by(self.benefit_percentage))
        } else {
            Ok(MonetaryAmount::zero())
        }
    }
}
