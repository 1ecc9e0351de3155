//! Concurrent rewards for one account.
//!
//! Every reward holds the account row from lookup to commit, so no savings
//! update is lost however the tasks interleave.

#![allow(clippy::unwrap_used)]

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;

use rewards_core::{AccountManager, Dining};

use common::{CARD, MERCHANT, money, network, seeded_store};

const TASKS: usize = 200;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_rewards_keep_exact_savings() {
    let (store, id) = seeded_store();
    let network = network(Arc::new(store.clone()));

    let handles = (0..TASKS).map(|_| {
        let network = network.clone();
        tokio::spawn(async move {
            let dining = Dining::new(
                money("100.00"),
                CARD,
                MERCHANT,
                NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            );
            network.reward_account_for(&dining).await
        })
    });

    let confirmations: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    let numbers: HashSet<_> = confirmations
        .iter()
        .map(|c| c.confirmation_number().to_string())
        .collect();
    assert_eq!(numbers.len(), TASKS);
    assert_eq!(store.reward_count(), TASKS);

    // 200 rewards of 8.00 split 50/50
    let account = store.account(id).await.unwrap();
    assert_eq!(account.beneficiary("Annabelle").unwrap().savings(), money("800.00"));
    assert_eq!(account.beneficiary("Corgan").unwrap().savings(), money("800.00"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_odd_cents_never_drift() {
    let (store, id) = seeded_store();
    let network = network(Arc::new(store.clone()));

    // 12.34 × 8% = 0.9872 -> 0.99, split 0.50 / 0.49
    let rewards = (0..50).map(|_| {
        let network = network.clone();
        async move {
            let dining = Dining::new(
                money("12.34"),
                CARD,
                MERCHANT,
                NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            );
            network.reward_account_for(&dining).await.unwrap()
        }
    });
    join_all(rewards).await;

    let account = store.account(id).await.unwrap();
    assert_eq!(account.beneficiary("Annabelle").unwrap().savings(), money("25.00"));
    assert_eq!(account.beneficiary("Corgan").unwrap().savings(), money("24.50"));
}
