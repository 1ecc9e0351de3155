//! Percentage value in the closed range `[0, 1]`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// A share between 0% and 100%, stored as a ratio (`0.5` for 50%).
///
/// Percentages never round on their own; rounding happens when one is applied
/// to a `MonetaryAmount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Percentage(Decimal);

impl Percentage {
    /// 0%.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// 100%.
    #[must_use]
    pub const fn one() -> Self {
        Self(Decimal::ONE)
    }

    /// Creates a percentage from a ratio.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::PercentageOutOfRange` if `ratio` is outside `[0, 1]`.
    pub fn from_decimal(ratio: Decimal) -> Result<Self, FormatError> {
        if ratio < Decimal::ZERO || ratio > Decimal::ONE {
            return Err(FormatError::PercentageOutOfRange(ratio));
        }
        Ok(Self(ratio.normalize()))
    }

    /// Parses either a percent string (`"50%"`) or a ratio (`"0.5"`).
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidPercentage` for malformed input and
    /// `FormatError::PercentageOutOfRange` for values outside 0%..=100%.
    pub fn value_of(input: &str) -> Result<Self, FormatError> {
        let trimmed = input.trim();
        let invalid = || FormatError::InvalidPercentage(input.to_string());

        let ratio = match trimmed.strip_suffix('%') {
            Some(percent) => {
                Decimal::from_str(percent.trim()).map_err(|_| invalid())? / Decimal::ONE_HUNDRED
            }
            None => Decimal::from_str(trimmed).map_err(|_| invalid())?,
        };

        Self::from_decimal(ratio)
    }

    /// Returns the ratio (`0.5` for 50%).
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns true for 0%.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two percentages.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::PercentageOutOfRange` if the sum exceeds 100%.
    pub fn checked_add(self, other: Self) -> Result<Self, FormatError> {
        Self::from_decimal(self.0 + other.0)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Percentage {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::value_of(s)
    }
}

impl TryFrom<String> for Percentage {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::value_of(&value)
    }
}

impl From<Percentage> for String {
    fn from(percentage: Percentage) -> Self {
        percentage.to_string()
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}
