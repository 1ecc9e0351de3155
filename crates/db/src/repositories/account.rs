//! Account table with per-row locks.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::Mutex;

use rewards_core::{Account, PersistenceError, PersistenceResult};
use rewards_shared::AccountId;

/// A stored account. The mutex is the row lock.
pub(crate) type AccountRow = Arc<Mutex<Account>>;

/// Accounts keyed by entity id, plus the credit cards that map to them.
#[derive(Debug, Default)]
pub(crate) struct AccountTable {
    rows: DashMap<AccountId, AccountRow>,
    cards: DashMap<String, AccountId>,
}

impl AccountTable {
    /// Stores a new account, assigning an entity id if it has none.
    pub(crate) fn insert(&self, mut account: Account) -> PersistenceResult<Account> {
        let id = account.entity_id().unwrap_or_default();
        account.set_entity_id(id);

        match self.rows.entry(id) {
            Entry::Occupied(_) => Err(PersistenceError::Conflict(format!(
                "account {id} already exists"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(account.clone())));
                Ok(account)
            }
        }
    }

    /// The row for an entity id.
    pub(crate) fn row(&self, id: AccountId) -> Option<AccountRow> {
        self.rows.get(&id).map(|row| Arc::clone(row.value()))
    }

    /// The row a credit card maps to.
    pub(crate) fn row_for_card(&self, credit_card_number: &str) -> Option<AccountRow> {
        let id = *self.cards.get(credit_card_number)?.value();
        self.row(id)
    }

    /// Maps a credit card to an account.
    pub(crate) fn link_card(
        &self,
        credit_card_number: &str,
        id: AccountId,
    ) -> PersistenceResult<()> {
        if !self.rows.contains_key(&id) {
            return Err(PersistenceError::Conflict(format!(
                "account {id} does not exist"
            )));
        }

        match self.cards.entry(credit_card_number.to_string()) {
            Entry::Occupied(existing) if *existing.get() != id => Err(PersistenceError::Conflict(
                "credit card already belongs to another account".to_string(),
            )),
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(id);
                Ok(())
            }
        }
    }

    /// Every row, in no particular order.
    pub(crate) fn rows(&self) -> Vec<AccountRow> {
        self.rows.iter().map(|row| Arc::clone(row.value())).collect()
    }
}
