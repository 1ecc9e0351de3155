//! Collaborator contracts the reward network depends on.
//!
//! Account lookup, beneficiary updates and the confirmation insert all run in
//! one `UnitOfWork`. An implementation must:
//! - serialize units of work that touch the same account (the account found
//!   by `find_by_credit_card` stays locked until the unit ends)
//! - make either all writes of a unit visible on `commit`, or none of them
//!   when the unit is dropped without committing
//! - never hand out the same confirmation number twice

use async_trait::async_trait;

use super::types::RewardConfirmation;
use crate::account::Account;
use crate::dining::Dining;
use crate::persistence::PersistenceResult;
use crate::restaurant::Restaurant;

/// Looks up restaurants by merchant number.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// The restaurant with this merchant number, if any.
    async fn find_by_merchant_number(
        &self,
        merchant_number: &str,
    ) -> PersistenceResult<Option<Restaurant>>;
}

/// Loads accounts and writes back their beneficiaries' savings.
#[async_trait]
pub trait AccountRepository: Send {
    /// The account a credit card belongs to, fully reconstituted.
    async fn find_by_credit_card(&mut self, credit_card_number: &str)
    -> PersistenceResult<Option<Account>>;

    /// Writes the current savings of every beneficiary of `account`.
    async fn update_beneficiaries(&mut self, account: &Account) -> PersistenceResult<()>;
}

/// Issues confirmation numbers and records confirmed rewards.
#[async_trait]
pub trait RewardRepository: Send {
    /// A confirmation number never issued before.
    async fn next_confirmation_number(&mut self) -> PersistenceResult<String>;

    /// Records the audit trail of a confirmed reward.
    async fn record_confirmation(
        &mut self,
        confirmation: &RewardConfirmation,
        dining: &Dining,
    ) -> PersistenceResult<()>;
}

/// One atomic reward attempt. Dropping it without `commit` rolls it back.
#[async_trait]
pub trait UnitOfWork: AccountRepository + RewardRepository {
    /// Makes every write of this unit visible at once.
    async fn commit(self: Box<Self>) -> PersistenceResult<()>;
}

/// Starts units of work.
#[async_trait]
pub trait RewardStore: Send + Sync {
    /// Begins a new unit of work.
    async fn begin(&self) -> PersistenceResult<Box<dyn UnitOfWork>>;
}
