//! Restaurants and their benefit policy.

pub mod error;
pub mod policy;
pub mod types;

pub use error::RestaurantError;
pub use policy::BenefitAvailabilityPolicy;
pub use types::Restaurant;
