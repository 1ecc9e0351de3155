//! Reward ledger: issued confirmation numbers and recorded rewards.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use serde::Serialize;

use rewards_core::{Dining, RewardConfirmation};
use rewards_shared::MonetaryAmount;

/// Audit record of one confirmed reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardRecord {
    /// Confirmation number handed back to the caller.
    pub confirmation_number: String,
    /// Benefit the account was rewarded.
    pub reward_amount: MonetaryAmount,
    /// Day the reward was recorded.
    pub reward_date: NaiveDate,
    /// Account that was rewarded.
    pub account_number: String,
    /// Merchant the dining was charged by.
    pub dining_merchant_number: String,
    /// Day of the dining.
    pub dining_date: NaiveDate,
    /// Amount of the dining.
    pub dining_amount: MonetaryAmount,
}

impl RewardRecord {
    /// Builds the record for a confirmation, dated today.
    #[must_use]
    pub fn new(confirmation: &RewardConfirmation, dining: &Dining) -> Self {
        let contribution = confirmation.account_contribution();
        Self {
            confirmation_number: confirmation.confirmation_number().to_string(),
            reward_amount: contribution.amount(),
            reward_date: Utc::now().date_naive(),
            account_number: contribution.account_number().to_string(),
            dining_merchant_number: dining.merchant_number().to_string(),
            dining_date: dining.date(),
            dining_amount: dining.amount(),
        }
    }
}

/// Committed reward records plus the confirmation number sequence.
#[derive(Debug, Default)]
pub(crate) struct RewardLedger {
    records: DashMap<String, RewardRecord>,
    sequence: AtomicU64,
    prefix: String,
}

impl RewardLedger {
    pub(crate) fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Draws the next number from the sequence. Numbers drawn by a unit that
    /// later rolls back are never reused.
    pub(crate) fn next_confirmation_number(&self) -> String {
        let next = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{next}", self.prefix)
    }

    pub(crate) fn contains(&self, confirmation_number: &str) -> bool {
        self.records.contains_key(confirmation_number)
    }

    pub(crate) fn insert(&self, record: RewardRecord) {
        self.records
            .insert(record.confirmation_number.clone(), record);
    }

    pub(crate) fn get(&self, confirmation_number: &str) -> Option<RewardRecord> {
        self.records
            .get(confirmation_number)
            .map(|record| record.value().clone())
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
