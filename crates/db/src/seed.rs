//! Loads seed data into the in-memory store.

use thiserror::Error;
use tracing::info;

use rewards_core::{
    Account, AccountError, Beneficiary, BenefitAvailabilityPolicy, PersistenceError, Restaurant,
    RestaurantError,
};
use rewards_shared::config::SeedConfig;
use rewards_shared::{FormatError, MonetaryAmount, Percentage};

use crate::repositories::{InMemoryRestaurantRepository, InMemoryRewardStore};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// An amount or percentage could not be parsed.
    #[error("Invalid seed value: {0}")]
    Format(#[from] FormatError),

    /// A seeded account breaks an account invariant.
    #[error("Invalid seed account {number}: {source}")]
    Account {
        /// Account number.
        number: String,
        /// The violated invariant.
        source: AccountError,
    },

    /// A seeded restaurant has an unknown availability policy.
    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    /// The store rejected a row.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Counts of what was seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Accounts stored.
    pub accounts: usize,
    /// Credit cards linked.
    pub credit_cards: usize,
    /// Restaurants stored.
    pub restaurants: usize,
}

/// Stores every seeded account, credit card and restaurant.
///
/// # Errors
///
/// Returns `SeedError` on the first value that fails to parse or store.
/// Rows stored before the failure are kept.
pub fn seed(
    config: &SeedConfig,
    store: &InMemoryRewardStore,
    restaurants: &InMemoryRestaurantRepository,
) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::default();

    for seeded in &config.accounts {
        let mut account = Account::new(&seeded.number, &seeded.name);
        for beneficiary in &seeded.beneficiaries {
            account
                .restore_beneficiary(Beneficiary::with_savings(
                    &beneficiary.name,
                    Percentage::value_of(&beneficiary.allocation_percentage)?,
                    MonetaryAmount::value_of(&beneficiary.savings)?,
                ))
                .map_err(|source| SeedError::Account {
                    number: seeded.number.clone(),
                    source,
                })?;
        }

        let account = store.insert_account(account)?;
        let Some(id) = account.entity_id() else {
            return Err(PersistenceError::Conflict(format!(
                "account {} stored without an id",
                seeded.number
            ))
            .into());
        };
        for card in &seeded.credit_cards {
            store.link_credit_card(card, id)?;
            summary.credit_cards += 1;
        }
        summary.accounts += 1;
    }

    for seeded in &config.restaurants {
        let policy: BenefitAvailabilityPolicy = seeded.benefit_availability_policy.parse()?;
        let restaurant = Restaurant::new(
            &seeded.merchant_number,
            &seeded.name,
            Percentage::value_of(&seeded.benefit_percentage)?,
        )
        .with_availability_policy(policy);
        restaurants.insert(restaurant)?;
        summary.restaurants += 1;
    }

    info!(
        accounts = summary.accounts,
        credit_cards = summary.credit_cards,
        restaurants = summary.restaurants,
        "Seed data loaded"
    );

    Ok(summary)
}
