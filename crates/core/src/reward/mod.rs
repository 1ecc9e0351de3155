//! Reward orchestration: the reward network, its collaborator ports, and
//! the confirmation it hands back.

pub mod error;
pub mod network;
pub mod ports;
pub mod types;

pub use error::RewardError;
pub use network::RewardNetwork;
pub use ports::{AccountRepository, RestaurantRepository, RewardRepository, RewardStore, UnitOfWork};
pub use types::RewardConfirmation;
