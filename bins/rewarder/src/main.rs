//! Rewards Network CLI
//!
//! Seeds the in-memory store from configuration, rewards one dining and
//! prints the confirmation as JSON.
//!
//! Usage: rewarder <amount> <credit-card-number> <merchant-number>

use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rewards_core::{Dining, RewardNetwork};
use rewards_db::{InMemoryRestaurantRepository, InMemoryRewardStore, seed};
use rewards_shared::{AppConfig, AppError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [amount, card, merchant] = args.as_slice() else {
        bail!("usage: rewarder <amount> <credit-card-number> <merchant-number>");
    };

    let store = InMemoryRewardStore::with_confirmation_prefix(&config.rewards.confirmation_prefix);
    let restaurants = InMemoryRestaurantRepository::new();
    seed(&config.seed, &store, &restaurants).context("Failed to load seed data")?;

    let network = RewardNetwork::new(Arc::new(store), Arc::new(restaurants));

    let dining = Dining::create(amount, card, merchant).map_err(AppError::from)?;
    match network.reward_account_for(&dining).await {
        Ok(confirmation) => {
            info!(confirmation_number = %confirmation.confirmation_number(), "Dining rewarded");
            println!("{}", serde_json::to_string_pretty(&confirmation)?);
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            error!(code = err.error_code(), error = %err, "Dining not rewarded");
            Err(err.into())
        }
    }
}
