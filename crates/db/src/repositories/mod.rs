//! Repository implementations backed by concurrent maps.
//!
//! Each account row sits behind its own async mutex, which plays the part of
//! a row lock: a unit of work holds it from lookup until commit or rollback.

pub mod account;
pub mod restaurant;
pub mod reward;
pub mod store;
pub mod unit_of_work;

pub use restaurant::InMemoryRestaurantRepository;
pub use reward::RewardRecord;
pub use store::InMemoryRewardStore;
pub use unit_of_work::InMemoryUnitOfWork;
