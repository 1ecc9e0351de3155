//! Unit of work over the in-memory store.
//!
//! Writes are staged inside the unit and applied on `commit`. The account row
//! found by `find_by_credit_card` stays locked until the unit is committed or
//! dropped, so two rewards for the same account never interleave.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;
use tracing::debug;

use rewards_core::{
    Account, AccountRepository, Beneficiary, Dining, PersistenceError, PersistenceResult,
    RewardConfirmation, RewardRepository, UnitOfWork,
};

use super::reward::RewardRecord;
use super::store::StoreState;

/// One reward attempt against an `InMemoryRewardStore`.
pub struct InMemoryUnitOfWork {
    state: Arc<StoreState>,
    locked: Option<OwnedMutexGuard<Account>>,
    staged_account: Option<Account>,
    staged_rewards: Vec<RewardRecord>,
    committed: bool,
}

impl InMemoryUnitOfWork {
    pub(crate) fn new(state: Arc<StoreState>) -> Self {
        Self {
            state,
            locked: None,
            staged_account: None,
            staged_rewards: Vec::new(),
            committed: false,
        }
    }

    fn has_staged_writes(&self) -> bool {
        self.staged_account.is_some() || !self.staged_rewards.is_empty()
    }
}

/// The stored account with each beneficiary's savings taken from `updated`.
///
/// Only savings are written back; allocation percentages stay as stored.
fn with_updated_savings(stored: &Account, updated: &Account) -> PersistenceResult<Account> {
    let mut account = Account::new(stored.number(), stored.name());
    if let Some(id) = stored.entity_id() {
        account.set_entity_id(id);
    }

    for beneficiary in stored.beneficiaries() {
        let savings = updated
            .beneficiary(beneficiary.name())
            .map_or(beneficiary.savings(), Beneficiary::savings);
        account
            .restore_beneficiary(Beneficiary::with_savings(
                beneficiary.name(),
                beneficiary.allocation_percentage(),
                savings,
            ))
            .map_err(|err| PersistenceError::Conflict(err.to_string()))?;
    }

    Ok(account)
}

#[async_trait]
impl AccountRepository for InMemoryUnitOfWork {
    async fn find_by_credit_card(
        &mut self,
        credit_card_number: &str,
    ) -> PersistenceResult<Option<Account>> {
        if self.locked.is_some() {
            return Err(PersistenceError::InvalidUnitOfWork(
                "unit of work already holds an account".to_string(),
            ));
        }

        let Some(row) = self.state.accounts.row_for_card(credit_card_number) else {
            return Ok(None);
        };

        let guard = row.lock_owned().await;
        let account = guard.clone();
        self.locked = Some(guard);
        Ok(Some(account))
    }

    async fn update_beneficiaries(&mut self, account: &Account) -> PersistenceResult<()> {
        let stored = self.locked.as_deref().ok_or_else(|| {
            PersistenceError::InvalidUnitOfWork(
                "beneficiaries updated before the account was loaded".to_string(),
            )
        })?;
        if stored.entity_id() != account.entity_id() {
            return Err(PersistenceError::InvalidUnitOfWork(format!(
                "account {} is not the one loaded by this unit of work",
                account.number()
            )));
        }

        self.staged_account = Some(with_updated_savings(stored, account)?);
        Ok(())
    }
}

#[async_trait]
impl RewardRepository for InMemoryUnitOfWork {
    async fn next_confirmation_number(&mut self) -> PersistenceResult<String> {
        Ok(self.state.rewards.next_confirmation_number())
    }

    async fn record_confirmation(
        &mut self,
        confirmation: &RewardConfirmation,
        dining: &Dining,
    ) -> PersistenceResult<()> {
        let record = RewardRecord::new(confirmation, dining);
        let duplicate = self.state.rewards.contains(&record.confirmation_number)
            || self
                .staged_rewards
                .iter()
                .any(|staged| staged.confirmation_number == record.confirmation_number);
        if duplicate {
            return Err(PersistenceError::Conflict(format!(
                "confirmation {} already recorded",
                record.confirmation_number
            )));
        }

        self.staged_rewards.push(record);
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(self: Box<Self>) -> PersistenceResult<()> {
        let mut unit = self;
        if let Some(staged) = unit.staged_account.take() {
            let guard = unit.locked.as_mut().ok_or_else(|| {
                PersistenceError::InvalidUnitOfWork("no account locked".to_string())
            })?;
            **guard = staged;
        }

        for record in std::mem::take(&mut unit.staged_rewards) {
            unit.state.rewards.insert(record);
        }

        unit.committed = true;
        debug!("Unit of work committed");
        Ok(())
    }
}

impl Drop for InMemoryUnitOfWork {
    fn drop(&mut self) {
        if !self.committed && self.has_staged_writes() {
            debug!("Unit of work rolled back");
        }
    }
}
