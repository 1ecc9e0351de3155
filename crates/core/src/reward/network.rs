//! Reward network: rewards an account for dining at a restaurant.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::error::RewardError;
use super::ports::{RestaurantRepository, RewardStore};
use super::types::RewardConfirmation;
use crate::dining::Dining;

/// Coordinates the lookups, the benefit computation and the allocation of
/// one reward.
///
/// Collaborators are passed in at construction; the network itself holds no
/// mutable state, so one instance can serve any number of concurrent calls.
#[derive(Clone)]
pub struct RewardNetwork {
    store: Arc<dyn RewardStore>,
    restaurants: Arc<dyn RestaurantRepository>,
}

impl RewardNetwork {
    /// Creates a reward network.
    ///
    /// * `store` - loads accounts, writes back savings and records confirmations
    /// * `restaurants` - determines how much to reward
    #[must_use]
    pub fn new(store: Arc<dyn RewardStore>, restaurants: Arc<dyn RestaurantRepository>) -> Self {
        Self { store, restaurants }
    }

    /// Rewards the account behind `dining`'s credit card.
    ///
    /// Steps, all inside one unit of work:
    /// 1. Look up the account by credit card (locking it)
    /// 2. Look up the restaurant by merchant number
    /// 3. Compute the benefit
    /// 4. Allocate it across the account's beneficiaries
    /// 5. Write back beneficiary savings
    /// 6. Issue a confirmation number and record the confirmation
    /// 7. Commit
    ///
    /// # Errors
    ///
    /// Any error aborts the unit of work: no savings change and no
    /// confirmation is recorded. Nothing is retried.
    #[instrument(
        name = "reward_account_for",
        skip_all,
        fields(
            card = %dining.masked_credit_card_number(),
            merchant = %dining.merchant_number(),
            amount = %dining.amount(),
        )
    )]
    pub async fn reward_account_for(
        &self,
        dining: &Dining,
    ) -> Result<RewardConfirmation, RewardError> {
        let mut unit = self.store.begin().await?;

        let mut account = unit
            .find_by_credit_card(dining.credit_card_number())
            .await?
            .ok_or_else(|| RewardError::AccountNotFound(dining.credit_card_number().to_string()))?;

        let restaurant = self
            .restaurants
            .find_by_merchant_number(dining.merchant_number())
            .await?
            .ok_or_else(|| RewardError::RestaurantNotFound(dining.merchant_number().to_string()))?;

        let benefit = restaurant.compute_benefit(&account, dining)?;
        debug!(account = %account.number(), %benefit, "Benefit computed");

        let contribution = account.allocate(benefit)?;
        unit.update_beneficiaries(&account).await?;

        let confirmation_number = unit.next_confirmation_number().await?;
        let confirmation = RewardConfirmation::new(confirmation_number, contribution);
        unit.record_confirmation(&confirmation, dining).await?;

        unit.commit().await?;

        info!(
            confirmation_number = %confirmation.confirmation_number(),
            account = %account.number(),
            benefit = %benefit,
            "Reward confirmed"
        );

        Ok(confirmation)
    }
}
