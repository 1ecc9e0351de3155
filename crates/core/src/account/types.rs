//! Account aggregate and its beneficiaries.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rewards_shared::{AccountId, MonetaryAmount, Percentage};

use super::error::AccountError;

/// A named allocation target inside an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    name: String,
    allocation_percentage: Percentage,
    savings: MonetaryAmount,
}

impl Beneficiary {
    /// Creates a beneficiary with no savings yet.
    #[must_use]
    pub fn new(name: impl Into<String>, allocation_percentage: Percentage) -> Self {
        Self::with_savings(name, allocation_percentage, MonetaryAmount::zero())
    }

    /// Reconstitutes a beneficiary with an existing savings balance.
    #[must_use]
    pub fn with_savings(
        name: impl Into<String>,
        allocation_percentage: Percentage,
        savings: MonetaryAmount,
    ) -> Self {
        Self {
            name: name.into(),
            allocation_percentage,
            savings,
        }
    }

    /// Name, unique within the owning account.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Share of every contribution this beneficiary receives.
    #[must_use]
    pub const fn allocation_percentage(&self) -> Percentage {
        self.allocation_percentage
    }

    /// Total amount credited so far.
    #[must_use]
    pub const fn savings(&self) -> MonetaryAmount {
        self.savings
    }

    pub(crate) fn set_allocation_percentage(&mut self, percentage: Percentage) {
        self.allocation_percentage = percentage;
    }

    pub(crate) fn credit(&mut self, amount: MonetaryAmount) {
        self.savings += amount;
    }
}

/// A rewards account and the beneficiaries that share its contributions.
///
/// Beneficiaries are kept ordered by name, which is the order allocation
/// walks them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    entity_id: Option<AccountId>,
    number: String,
    name: String,
    beneficiaries: BTreeMap<String, Beneficiary>,
}

impl Account {
    /// Creates an account with no beneficiaries.
    #[must_use]
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            entity_id: None,
            number: number.into(),
            name: name.into(),
            beneficiaries: BTreeMap::new(),
        }
    }

    /// Persistence identity, `None` until the account is saved.
    #[must_use]
    pub const fn entity_id(&self) -> Option<AccountId> {
        self.entity_id
    }

    /// Sets the persistence identity. Called by storage adapters only.
    pub fn set_entity_id(&mut self, id: AccountId) {
        self.entity_id = Some(id);
    }

    /// Account number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Account holder name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Beneficiaries in allocation order.
    pub fn beneficiaries(&self) -> impl ExactSizeIterator<Item = &Beneficiary> {
        self.beneficiaries.values()
    }

    pub(crate) fn beneficiaries_mut(&mut self) -> impl Iterator<Item = &mut Beneficiary> {
        self.beneficiaries.values_mut()
    }

    /// Looks up a beneficiary by name (case-sensitive).
    #[must_use]
    pub fn beneficiary(&self, name: &str) -> Option<&Beneficiary> {
        self.beneficiaries.get(name)
    }

    /// Sum of all allocation percentages, as a ratio.
    #[must_use]
    pub fn total_allocation(&self) -> Decimal {
        self.beneficiaries
            .values()
            .map(|b| b.allocation_percentage.as_decimal())
            .sum()
    }

    /// True when the allocation percentages add up to exactly 100%.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.total_allocation() == Decimal::ONE
    }

    /// Adds a beneficiary by name.
    ///
    /// The first beneficiary of an account receives 100%; later ones start
    /// at 0% until percentages are rebalanced.
    pub fn add_beneficiary(&mut self, name: impl Into<String>) -> Result<(), AccountError> {
        let percentage = if self.beneficiaries.is_empty() {
            Percentage::one()
        } else {
            Percentage::zero()
        };
        self.add_beneficiary_with_allocation(name, percentage)
    }

    /// Adds a beneficiary with an explicit allocation percentage.
    pub fn add_beneficiary_with_allocation(
        &mut self,
        name: impl Into<String>,
        allocation_percentage: Percentage,
    ) -> Result<(), AccountError> {
        self.restore_beneficiary(Beneficiary::new(name, allocation_percentage))
    }

    /// Adds a beneficiary reconstituted from storage, savings included.
    pub fn restore_beneficiary(&mut self, beneficiary: Beneficiary) -> Result<(), AccountError> {
        if self.beneficiaries.contains_key(beneficiary.name()) {
            return Err(AccountError::DuplicateBeneficiary(beneficiary.name));
        }

        let total = self.total_allocation() + beneficiary.allocation_percentage.as_decimal();
        if total > Decimal::ONE {
            return Err(AccountError::AllocationExceedsTotal { total });
        }

        self.beneficiaries
            .insert(beneficiary.name.clone(), beneficiary);
        Ok(())
    }

    /// Replaces the allocation percentages of the named beneficiaries.
    ///
    /// Either every update applies or none does.
    pub fn update_allocation_percentages(
        &mut self,
        allocations: &BTreeMap<String, Percentage>,
    ) -> Result<(), AccountError> {
        let mut updated = self.beneficiaries.clone();
        apply_allocations(&mut updated, allocations)?;

        let total = allocation_total(&updated);
        if total > Decimal::ONE {
            return Err(AccountError::AllocationExceedsTotal { total });
        }

        self.beneficiaries = updated;
        Ok(())
    }

    /// Removes a beneficiary and rebalances the ones that remain.
    ///
    /// When beneficiaries remain and the account was fully allocated before,
    /// the new percentages must again total exactly 100%. Removing the only
    /// beneficiary, or one holding 0%, needs no rebalance.
    pub fn remove_beneficiary(
        &mut self,
        name: &str,
        allocations: &BTreeMap<String, Percentage>,
    ) -> Result<Beneficiary, AccountError> {
        let was_valid = self.is_valid();
        let mut remaining = self.beneficiaries.clone();
        let removed = remaining
            .remove(name)
            .ok_or_else(|| AccountError::BeneficiaryNotFound(name.to_string()))?;

        apply_allocations(&mut remaining, allocations)?;

        let total = allocation_total(&remaining);
        if total > Decimal::ONE {
            return Err(AccountError::AllocationExceedsTotal { total });
        }
        if was_valid && !remaining.is_empty() && total != Decimal::ONE {
            return Err(AccountError::InvalidAllocation { total });
        }

        self.beneficiaries = remaining;
        Ok(removed)
    }
}

fn apply_allocations(
    beneficiaries: &mut BTreeMap<String, Beneficiary>,
    allocations: &BTreeMap<String, Percentage>,
) -> Result<(), AccountError> {
    for (name, percentage) in allocations {
        beneficiaries
            .get_mut(name)
            .ok_or_else(|| AccountError::BeneficiaryNotFound(name.clone()))?
            .set_allocation_percentage(*percentage);
    }
    Ok(())
}

fn allocation_total(beneficiaries: &BTreeMap<String, Beneficiary>) -> Decimal {
    beneficiaries
        .values()
        .map(|b| b.allocation_percentage.as_decimal())
        .sum()
}
