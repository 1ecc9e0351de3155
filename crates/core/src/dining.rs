//! A dining event charged to a credit card.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rewards_shared::{FormatError, MonetaryAmount};

/// One charge made to a credit card at a restaurant. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dining {
    amount: MonetaryAmount,
    credit_card_number: String,
    merchant_number: String,
    date: NaiveDate,
}

impl Dining {
    /// Creates a dining event.
    #[must_use]
    pub fn new(
        amount: MonetaryAmount,
        credit_card_number: impl Into<String>,
        merchant_number: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            credit_card_number: credit_card_number.into(),
            merchant_number: merchant_number.into(),
            date,
        }
    }

    /// Creates a dining event dated today from a textual amount such as `"100.00"`.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidAmount` if `amount` does not parse.
    pub fn create(
        amount: &str,
        credit_card_number: impl Into<String>,
        merchant_number: impl Into<String>,
    ) -> Result<Self, FormatError> {
        Ok(Self::new(
            MonetaryAmount::value_of(amount)?,
            credit_card_number,
            merchant_number,
            Utc::now().date_naive(),
        ))
    }

    /// Amount charged.
    #[must_use]
    pub const fn amount(&self) -> MonetaryAmount {
        self.amount
    }

    /// Card the charge was made to.
    #[must_use]
    pub fn credit_card_number(&self) -> &str {
        &self.credit_card_number
    }

    /// Merchant that made the charge.
    #[must_use]
    pub fn merchant_number(&self) -> &str {
        &self.merchant_number
    }

    /// Day the meal took place.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Card number with all but the last four digits hidden, for logs.
    #[must_use]
    pub fn masked_credit_card_number(&self) -> String {
        let digits = self.credit_card_number.chars().count();
        let visible: String = self
            .credit_card_number
            .chars()
            .skip(digits.saturating_sub(4))
            .collect();
        format!("{}{visible}", "*".repeat(digits.saturating_sub(4)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        let dining = Dining::create("100.00", "1234123412341234", "1234567890").unwrap();
        assert_eq!(dining.amount(), MonetaryAmount::value_of("100").unwrap());
        assert_eq!(dining.credit_card_number(), "1234123412341234");
        assert_eq!(dining.merchant_number(), "1234567890");
        assert!(dining.date() <= Utc::now().date_naive());
    }

    #[test]
    fn test_create_rejects_bad_amount() {
        assert!(matches!(
            Dining::create("lots", "1234123412341234", "1234567890"),
            Err(FormatError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_masked_credit_card_number() {
        let dining = Dining::create("1", "1234123412341234", "1").unwrap();
        assert_eq!(dining.masked_credit_card_number(), "************1234");

        let short = Dining::create("1", "12", "1").unwrap();
        assert_eq!(short.masked_credit_card_number(), "12");
    }
}
