//! In-memory storage for the rewards network.
//!
//! This crate provides:
//! - `InMemoryRewardStore`, the account and reward tables behind the
//!   `RewardStore` and `AccountManager` ports
//! - `InMemoryRestaurantRepository` for restaurant lookups
//! - Seeding from `SeedConfig`

pub mod repositories;
pub mod seed;

pub use repositories::{
    InMemoryRestaurantRepository, InMemoryRewardStore, InMemoryUnitOfWork, RewardRecord,
};
pub use seed::{SeedError, SeedSummary, seed};
