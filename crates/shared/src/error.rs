//! Application-wide error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while parsing monetary amounts and percentages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Not a decimal amount.
    #[error("Invalid monetary amount: {0:?}")]
    InvalidAmount(String),

    /// Not a percent string or ratio.
    #[error("Invalid percentage: {0:?}")]
    InvalidPercentage(String),

    /// Parsed, but not within 0%..=100%.
    #[error("Percentage must be between 0 and 1, got {0}")]
    PercentageOutOfRange(Decimal),
}

/// Application error types.
///
/// Domain errors are folded into one of these kinds before they reach an
/// outer surface such as a binary or a batch job.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Conflict (e.g., duplicate entry).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Persistence collaborator failure.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<FormatError> for AppError {
    fn from(err: FormatError) -> Self {
        Self::Validation(err.to_string())
    }
}
