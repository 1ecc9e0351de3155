//! Value types used across the application.

pub mod id;
pub mod money;
pub mod percentage;


pub use id::AccountId;
pub use money::MonetaryAmount;
pub use percentage::Percentage;
