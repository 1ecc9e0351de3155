//! Monetary amount with fixed minor-unit precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` and keeps every stored value at the
//! currency's minor unit (two decimal places).

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::percentage::Percentage;
use crate::error::FormatError;

/// Number of decimal places kept for every stored amount.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// A currency-unaware monetary amount.
///
/// Equality and ordering are exact on the minor-unit value, so `4.0` and
/// `4.00` compare equal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct MonetaryAmount(Decimal);

/// Rounds half-up to the minor unit and pins the scale, so `8` displays as `8.00`.
fn to_minor_unit(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MINOR_UNIT_SCALE);
    rounded
}

impl MonetaryAmount {
    /// Creates an amount, rounding `value` to the minor unit.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(to_minor_unit(value))
    }

    /// Creates an amount from a count of minor units (cents).
    #[must_use]
    pub fn from_minor_units(units: i64) -> Self {
        Self(Decimal::new(units, MINOR_UNIT_SCALE))
    }

    /// The zero amount.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_minor_units(0)
    }

    /// Parses an amount such as `"8.00"`, `"8"` or `"$8.00"`.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidAmount` if the string is not a decimal number.
    pub fn value_of(input: &str) -> Result<Self, FormatError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        Decimal::from_str(digits)
            .map(Self::new)
            .map_err(|_| FormatError::InvalidAmount(input.to_string()))
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Applies a percentage, rounding the product once, half-up, to the minor unit.
    #[must_use]
    pub fn multiply_by(self, percentage: Percentage) -> Self {
        Self::new(self.0 * percentage.as_decimal())
    }

    /// Returns the share `part` represents of `whole`.
    ///
    /// `None` when `whole` is zero or the ratio falls outside `[0, 1]`.
    #[must_use]
    pub fn percentage_of(part: Self, whole: Self) -> Option<Percentage> {
        if whole.is_zero() {
            return None;
        }
        Percentage::from_decimal(part.0 / whole.0).ok()
    }
}

impl From<Decimal> for MonetaryAmount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<MonetaryAmount> for Decimal {
    fn from(amount: MonetaryAmount) -> Self {
        amount.0
    }
}

impl FromStr for MonetaryAmount {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::value_of(s)
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}", -self.0)
        } else {
            write!(f, "${}", self.0)
        }
    }
}

impl Add for MonetaryAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for MonetaryAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for MonetaryAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for MonetaryAmount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for MonetaryAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a MonetaryAmount> for MonetaryAmount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
