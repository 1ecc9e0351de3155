//! Fixtures shared by the storage integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use rewards_core::{Account, Restaurant, RewardNetwork, RewardStore};
use rewards_db::{InMemoryRestaurantRepository, InMemoryRewardStore};
use rewards_shared::{AccountId, MonetaryAmount, Percentage};

pub const CARD: &str = "1234123412341234";
pub const MERCHANT: &str = "1234567890";

pub fn money(s: &str) -> MonetaryAmount {
    MonetaryAmount::value_of(s).unwrap()
}

pub fn pct(s: &str) -> Percentage {
    Percentage::value_of(s).unwrap()
}

/// Keith and Keri Donald with Annabelle and Corgan at 50% each.
pub fn donald() -> Account {
    let mut account = Account::new("123456789", "Keith and Keri Donald");
    account
        .add_beneficiary_with_allocation("Annabelle", pct("50%"))
        .unwrap();
    account
        .add_beneficiary_with_allocation("Corgan", pct("50%"))
        .unwrap();
    account
}

/// AppleBees, paying 8% on every dining.
pub fn applebees() -> Restaurant {
    Restaurant::new(MERCHANT, "AppleBees", pct("8%"))
}

/// A store holding the Donald account linked to `CARD`.
pub fn seeded_store() -> (InMemoryRewardStore, AccountId) {
    let store = InMemoryRewardStore::with_confirmation_prefix("RW-");
    let id = store
        .insert_account(donald())
        .unwrap()
        .entity_id()
        .unwrap();
    store.link_credit_card(CARD, id).unwrap();
    (store, id)
}

/// A restaurant repository holding AppleBees.
pub fn seeded_restaurants() -> Arc<InMemoryRestaurantRepository> {
    let restaurants = InMemoryRestaurantRepository::new();
    restaurants.insert(applebees()).unwrap();
    Arc::new(restaurants)
}

/// A network over `store` and the seeded restaurants.
pub fn network(store: Arc<dyn RewardStore>) -> RewardNetwork {
    RewardNetwork::new(store, seeded_restaurants())
}
