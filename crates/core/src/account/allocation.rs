//! Benefit allocation across an account's beneficiaries.
//!
//! The allocation walks beneficiaries in name order and guarantees the
//! distributed amounts add up EXACTLY to the distributable total (no cents
//! lost or gained):
//! 1. Every beneficiary but the last gets `benefit × percentage`, rounded half-up
//! 2. The last beneficiary gets whatever remains of the distributable total
//! 3. Each beneficiary's savings grows by its distribution

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use rewards_shared::{MonetaryAmount, Percentage};

use super::error::AccountError;
use super::types::Account;

/// One beneficiary's share of a contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    /// Beneficiary that received the share.
    pub beneficiary: String,
    /// Amount credited.
    pub amount: MonetaryAmount,
    /// The beneficiary's allocation percentage at the time of the split.
    pub percentage: Percentage,
    /// The beneficiary's savings after the credit.
    pub total_savings: MonetaryAmount,
}

/// A benefit attributed to one account, with its per-beneficiary split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountContribution {
    account_number: String,
    amount: MonetaryAmount,
    distributions: BTreeMap<String, Distribution>,
}

impl AccountContribution {
    /// Number of the account the contribution was made to.
    #[must_use]
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Total benefit the contribution was made from.
    #[must_use]
    pub const fn amount(&self) -> MonetaryAmount {
        self.amount
    }

    /// Distributions keyed by beneficiary name.
    #[must_use]
    pub const fn distributions(&self) -> &BTreeMap<String, Distribution> {
        &self.distributions
    }

    /// The distribution made to a beneficiary, if any.
    #[must_use]
    pub fn distribution(&self, beneficiary: &str) -> Option<&Distribution> {
        self.distributions.get(beneficiary)
    }

    /// Sum of all distributions.
    #[must_use]
    pub fn distributed_amount(&self) -> MonetaryAmount {
        self.distributions.values().map(|d| d.amount).sum()
    }

    /// Part of the benefit not assigned to anyone (non-zero only when the
    /// allocation percentages total less than 100%).
    #[must_use]
    pub fn undistributed_amount(&self) -> MonetaryAmount {
        self.amount - self.distributed_amount()
    }
}

impl Account {
    /// Splits `benefit` across the beneficiaries and credits their savings.
    ///
    /// When percentages total 100% the distributions add up to `benefit`
    /// exactly. A lower total leaves `benefit × (1 - total)` undistributed.
    /// On error no savings are touched.
    ///
    /// # Errors
    ///
    /// - `AccountError::NegativeBenefit` if `benefit < 0`
    /// - `AccountError::NoAllocationTargets` if there are no beneficiaries or
    ///   their percentages total 0%
    /// - `AccountError::AllocationExceedsTotal` if percentages total over 100%
    /// - `AccountError::NegativeDistribution` if the remainder left for the
    ///   last beneficiary is negative, whatever its current savings
    pub fn allocate(&mut self, benefit: MonetaryAmount) -> Result<AccountContribution, AccountError> {
        if benefit.is_negative() {
            return Err(AccountError::NegativeBenefit(benefit));
        }

        let total = self.total_allocation();
        if total.is_zero() {
            return Err(AccountError::NoAllocationTargets {
                account_number: self.number().to_string(),
            });
        }
        if total > Decimal::ONE {
            return Err(AccountError::AllocationExceedsTotal { total });
        }

        let distributable = MonetaryAmount::new(benefit.as_decimal() * total);
        let amounts = split(benefit, distributable, self.beneficiaries().map(|b| b.allocation_percentage()));

        if let Some((beneficiary, amount)) = self
            .beneficiaries()
            .zip(&amounts)
            .find(|(_, amount)| amount.is_negative())
        {
            return Err(AccountError::NegativeDistribution {
                name: beneficiary.name().to_string(),
                amount: *amount,
            });
        }

        let mut distributions = BTreeMap::new();
        for (beneficiary, amount) in self.beneficiaries_mut().zip(amounts) {
            beneficiary.credit(amount);
            distributions.insert(
                beneficiary.name().to_string(),
                Distribution {
                    beneficiary: beneficiary.name().to_string(),
                    amount,
                    percentage: beneficiary.allocation_percentage(),
                    total_savings: beneficiary.savings(),
                },
            );
        }

        Ok(AccountContribution {
            account_number: self.number().to_string(),
            amount: benefit,
            distributions,
        })
    }
}

/// Rounds every share but the last; the last absorbs the remainder of `distributable`.
fn split(
    benefit: MonetaryAmount,
    distributable: MonetaryAmount,
    percentages: impl ExactSizeIterator<Item = Percentage>,
) -> Vec<MonetaryAmount> {
    let count = percentages.len();
    let mut amounts = Vec::with_capacity(count);
    let mut allocated = MonetaryAmount::zero();

    for (i, percentage) in percentages.enumerate() {
        let amount = if i + 1 == count {
            distributable - allocated
        } else {
            benefit.multiply_by(percentage)
        };
        allocated += amount;
        amounts.push(amount);
    }

    amounts
}
