//! Benefit availability policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RestaurantError;
use crate::account::Account;
use crate::dining::Dining;

/// Decides whether a dining earns any benefit at all.
///
/// Stored as a one-letter code next to the restaurant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BenefitAvailabilityPolicy {
    /// Every dining earns the benefit (`"A"`).
    #[default]
    Always,
    /// No dining earns a benefit (`"N"`).
    Never,
}

impl BenefitAvailabilityPolicy {
    /// Returns true if `account` earns a benefit for `dining`.
    #[must_use]
    pub const fn is_benefit_available_for(self, _account: &Account, _dining: &Dining) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// The stored one-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Always => "A",
            Self::Never => "N",
        }
    }
}

impl fmt::Display for BenefitAvailabilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BenefitAvailabilityPolicy {
    type Err = RestaurantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(Self::Always),
            "N" => Ok(Self::Never),
            other => Err(RestaurantError::UnknownAvailabilityPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for BenefitAvailabilityPolicy {
    type Error = RestaurantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BenefitAvailabilityPolicy> for String {
    fn from(policy: BenefitAvailabilityPolicy) -> Self {
        policy.code().to_string()
    }
}
