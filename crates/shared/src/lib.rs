//! Shared value types, errors, and configuration for the rewards network.
//!
//! This crate provides the building blocks every other crate leans on:
//! - `MonetaryAmount` and `Percentage` with exact decimal arithmetic
//! - Typed IDs for persisted entities
//! - Parsing and application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult, FormatError};
pub use types::{AccountId, MonetaryAmount, Percentage};
