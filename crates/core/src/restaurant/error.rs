//! Restaurant error types.

use thiserror::Error;

/// Errors raised while computing a restaurant's benefit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestaurantError {
    /// The dining was charged by another merchant.
    #[error("Dining merchant {actual} does not match restaurant {expected}")]
    PolicyNotApplicable {
        /// This restaurant's merchant number.
        expected: String,
        /// The dining's merchant number.
        actual: String,
    },

    /// Unrecognized availability policy code.
    #[error("Unknown benefit availability policy: {0:?}")]
    UnknownAvailabilityPolicy(String),
}
