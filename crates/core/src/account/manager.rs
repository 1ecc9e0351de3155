//! Account management port.
//!
//! Administrative operations on accounts and their beneficiaries, implemented
//! by a storage adapter. The reward flow itself never goes through here.

use std::collections::BTreeMap;

use async_trait::async_trait;

use rewards_shared::{AccountId, Percentage};

use super::error::AccountManagerError;
use super::types::Account;

/// Result alias for account management operations.
pub type ManagerResult<T> = Result<T, AccountManagerError>;

/// Administrative access to stored accounts.
#[async_trait]
pub trait AccountManager: Send + Sync {
    /// Every stored account.
    async fn all_accounts(&self) -> ManagerResult<Vec<Account>>;

    /// The account with the given id.
    async fn account(&self, id: AccountId) -> ManagerResult<Account>;

    /// Stores a new account, assigning its entity id.
    async fn save(&self, account: Account) -> ManagerResult<Account>;

    /// Overwrites the number, name and beneficiaries of a stored account.
    ///
    /// Savings keep their stored values; only allocation changes them.
    async fn update(&self, account: &Account) -> ManagerResult<()>;

    /// Replaces the allocation percentages of the named beneficiaries.
    async fn update_beneficiary_allocation_percentages(
        &self,
        id: AccountId,
        allocations: &BTreeMap<String, Percentage>,
    ) -> ManagerResult<()>;

    /// Adds a beneficiary; see `Account::add_beneficiary` for its initial share.
    async fn add_beneficiary(&self, id: AccountId, name: &str) -> ManagerResult<()>;

    /// Removes a beneficiary, rebalancing the rest with `allocations`.
    async fn remove_beneficiary(
        &self,
        id: AccountId,
        name: &str,
        allocations: &BTreeMap<String, Percentage>,
    ) -> ManagerResult<()>;
}
