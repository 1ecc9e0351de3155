//! Account aggregate: beneficiaries, allocation, and account management.

pub mod allocation;
pub mod error;
pub mod manager;
pub mod types;

#[cfg(test)]
mod allocation_props;

pub use allocation::{AccountContribution, Distribution};
pub use error::{AccountError, AccountManagerError};
pub use manager::AccountManager;
pub use types::{Account, Beneficiary};
