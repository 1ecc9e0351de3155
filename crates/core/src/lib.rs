//! Core business logic for the rewards network.
//!
//! This crate contains pure business logic with ZERO storage dependencies.
//! Storage is reached only through the ports in `reward::ports` and
//! `account::manager`.
//!
//! # Modules
//!
//! - `account` - Accounts, beneficiaries and benefit allocation
//! - `restaurant` - Restaurants and their benefit policy
//! - `dining` - The dining event being rewarded
//! - `reward` - The reward network and its collaborator ports
//! - `persistence` - Storage failure type shared by all ports

pub mod account;
pub mod dining;
pub mod persistence;
pub mod restaurant;
pub mod reward;

pub use account::{
    Account, AccountContribution, AccountError, AccountManager, AccountManagerError, Beneficiary,
    Distribution,
};
pub use dining::Dining;
pub use persistence::{PersistenceError, PersistenceResult};
pub use restaurant::{BenefitAvailabilityPolicy, Restaurant, RestaurantError};
pub use reward::{
    AccountRepository, RestaurantRepository, RewardConfirmation, RewardError, RewardNetwork,
    RewardRepository, RewardStore, UnitOfWork,
};
