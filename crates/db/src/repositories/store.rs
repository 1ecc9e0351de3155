//! In-memory reward store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use rewards_core::account::manager::ManagerResult;
use rewards_core::{
    Account, AccountError, AccountManager, AccountManagerError, Beneficiary, PersistenceError,
    PersistenceResult, RewardStore, UnitOfWork,
};
use rewards_shared::{AccountId, MonetaryAmount, Percentage};

use super::account::{AccountRow, AccountTable};
use super::reward::{RewardLedger, RewardRecord};
use super::unit_of_work::InMemoryUnitOfWork;

/// Tables shared by the store and every unit of work it begins.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) accounts: AccountTable,
    pub(crate) rewards: RewardLedger,
}

/// Accounts, credit cards and reward records, kept in process memory.
///
/// Cloning is cheap and clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRewardStore {
    state: Arc<StoreState>,
}

impl InMemoryRewardStore {
    /// Creates an empty store issuing unprefixed confirmation numbers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose confirmation numbers start with `prefix`.
    #[must_use]
    pub fn with_confirmation_prefix(prefix: impl Into<String>) -> Self {
        Self {
            state: Arc::new(StoreState {
                accounts: AccountTable::default(),
                rewards: RewardLedger::with_prefix(prefix),
            }),
        }
    }

    /// Stores a new account, assigning its entity id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Conflict` if the account is already stored.
    pub fn insert_account(&self, account: Account) -> PersistenceResult<Account> {
        self.state.accounts.insert(account)
    }

    /// Maps a credit card to a stored account.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Conflict` if the account does not exist or
    /// the card already belongs to another account.
    pub fn link_credit_card(&self, credit_card_number: &str, id: AccountId) -> PersistenceResult<()> {
        self.state.accounts.link_card(credit_card_number, id)
    }

    /// The committed reward with this confirmation number.
    #[must_use]
    pub fn find_reward(&self, confirmation_number: &str) -> Option<RewardRecord> {
        self.state.rewards.get(confirmation_number)
    }

    /// Number of committed rewards.
    #[must_use]
    pub fn reward_count(&self) -> usize {
        self.state.rewards.len()
    }

    fn row(&self, id: AccountId) -> ManagerResult<AccountRow> {
        self.state
            .accounts
            .row(id)
            .ok_or(AccountManagerError::AccountNotFound(id))
    }
}

/// `updated` with each beneficiary's savings taken from `stored`.
///
/// Savings only change through allocation, so a beneficiary new to the
/// account starts at zero whatever the caller sent.
fn with_stored_savings(updated: &Account, stored: &Account) -> Result<Account, AccountError> {
    let mut account = Account::new(updated.number(), updated.name());
    if let Some(id) = stored.entity_id() {
        account.set_entity_id(id);
    }

    for beneficiary in updated.beneficiaries() {
        let savings = stored
            .beneficiary(beneficiary.name())
            .map_or_else(MonetaryAmount::zero, Beneficiary::savings);
        account.restore_beneficiary(Beneficiary::with_savings(
            beneficiary.name(),
            beneficiary.allocation_percentage(),
            savings,
        ))?;
    }

    Ok(account)
}

#[async_trait]
impl RewardStore for InMemoryRewardStore {
    async fn begin(&self) -> PersistenceResult<Box<dyn UnitOfWork>> {
        Ok(Box::new(InMemoryUnitOfWork::new(Arc::clone(&self.state))))
    }
}

#[async_trait]
impl AccountManager for InMemoryRewardStore {
    async fn all_accounts(&self) -> ManagerResult<Vec<Account>> {
        let mut accounts = Vec::new();
        for row in self.state.accounts.rows() {
            accounts.push(row.lock().await.clone());
        }
        accounts.sort_by(|a, b| a.number().cmp(b.number()));
        Ok(accounts)
    }

    async fn account(&self, id: AccountId) -> ManagerResult<Account> {
        Ok(self.row(id)?.lock().await.clone())
    }

    async fn save(&self, account: Account) -> ManagerResult<Account> {
        Ok(self.insert_account(account)?)
    }

    async fn update(&self, account: &Account) -> ManagerResult<()> {
        let id = account.entity_id().ok_or_else(|| {
            PersistenceError::Conflict(format!("account {} has not been saved", account.number()))
        })?;
        let row = self.row(id)?;
        let mut stored = row.lock().await;
        *stored = with_stored_savings(account, &stored)?;
        Ok(())
    }

    async fn update_beneficiary_allocation_percentages(
        &self,
        id: AccountId,
        allocations: &BTreeMap<String, Percentage>,
    ) -> ManagerResult<()> {
        let row = self.row(id)?;
        row.lock().await.update_allocation_percentages(allocations)?;
        Ok(())
    }

    async fn add_beneficiary(&self, id: AccountId, name: &str) -> ManagerResult<()> {
        let row = self.row(id)?;
        row.lock().await.add_beneficiary(name)?;
        Ok(())
    }

    async fn remove_beneficiary(
        &self,
        id: AccountId,
        name: &str,
        allocations: &BTreeMap<String, Percentage>,
    ) -> ManagerResult<()> {
        let row = self.row(id)?;
        row.lock().await.remove_beneficiary(name, allocations)?;
        Ok(())
    }
}
