//! Property-based tests for benefit allocation.
//!
//! - Sum invariant: distributions add up to the distributable total
//! - Even splits stay even; odd cents land on the last beneficiary
//! - Savings grow by exactly the distributed amount
//! - Small benefits either split exactly or are rejected without side effects

use proptest::prelude::*;
use rust_decimal::Decimal;

use rewards_shared::{MonetaryAmount, Percentage};

use super::error::AccountError;
use super::types::{Account, Beneficiary};

/// Strategy to generate benefits from 1,000.00 to 1,000,000.00.
///
/// The floor keeps every share large enough that rounding the leading
/// shares up can never overdraw the last one.
fn benefit() -> impl Strategy<Value = MonetaryAmount> {
    (100_000i64..100_000_000i64).prop_map(MonetaryAmount::from_minor_units)
}

/// Strategy to generate any non-negative benefit up to 1,000.00.
fn any_benefit() -> impl Strategy<Value = MonetaryAmount> {
    (0i64..100_000i64).prop_map(MonetaryAmount::from_minor_units)
}

/// Strategy to generate 1 to 10 shares in whole basis points that total 100%.
fn shares_summing_to_one() -> impl Strategy<Value = Vec<Percentage>> {
    prop::collection::vec(1u32..100, 1..=10).prop_map(|weights| to_basis_points(&weights, 10_000))
}

/// Strategy to generate 1 to 10 shares totalling between 50% and 100%.
fn shares_up_to_one() -> impl Strategy<Value = Vec<Percentage>> {
    (prop::collection::vec(1u32..100, 1..=10), 5_000u32..=10_000)
        .prop_map(|(weights, total)| to_basis_points(&weights, total))
}

/// Spreads `total` basis points over `weights`, giving rounding slack to the last share.
fn to_basis_points(weights: &[u32], total: u32) -> Vec<Percentage> {
    let sum: u32 = weights.iter().sum();
    let mut points: Vec<u32> = weights.iter().map(|w| w * total / sum).collect();
    let assigned: u32 = points.iter().sum();
    if let Some(last) = points.last_mut() {
        *last += total - assigned;
    }
    points
        .into_iter()
        .map(|p| Percentage::from_decimal(Decimal::new(i64::from(p), 4)).unwrap())
        .collect()
}

/// Strategy to generate 3 to 10 shares in whole basis points that total 100%.
fn many_shares_summing_to_one() -> impl Strategy<Value = Vec<Percentage>> {
    prop::collection::vec(1u32..100, 3..=10).prop_map(|weights| to_basis_points(&weights, 10_000))
}

/// Same beneficiaries as `account_with`, each already holding `savings`.
fn account_with_savings(shares: &[Percentage], savings: MonetaryAmount) -> Account {
    let mut account = Account::new("123456789", "Property Account");
    for (i, share) in shares.iter().enumerate() {
        account
            .restore_beneficiary(Beneficiary::with_savings(format!("beneficiary-{i:02}"), *share, savings))
            .unwrap();
    }
    account
}

fn account_with(shares: &[Percentage]) -> Account {
    let mut account = Account::new("123456789", "Property Account");
    for (i, share) in shares.iter().enumerate() {
        account
            .add_beneficiary_with_allocation(format!("beneficiary-{i:02}"), *share)
            .unwrap();
    }
    account
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* benefit and shares totalling 100%, the distributions SHALL
    /// add up to the benefit exactly.
    #[test]
    fn prop_full_allocation_sums_to_benefit(
        benefit in benefit(),
        shares in shares_summing_to_one(),
    ) {
        let mut account = account_with(&shares);
        let contribution = account.allocate(benefit).unwrap();

        prop_assert_eq!(contribution.distributions().len(), shares.len());
        prop_assert_eq!(contribution.distributed_amount(), benefit);
        prop_assert!(contribution.undistributed_amount().is_zero());
    }

    /// *For any* shares totalling at most 100%, the distributions SHALL add
    /// up to `round(benefit × total)` and never exceed the benefit.
    #[test]
    fn prop_partial_allocation_sums_to_rounded_share(
        benefit in benefit(),
        shares in shares_up_to_one(),
    ) {
        let mut account = account_with(&shares);
        let total = account.total_allocation();
        let contribution = account.allocate(benefit).unwrap();

        prop_assert_eq!(
            contribution.distributed_amount(),
            MonetaryAmount::new(benefit.as_decimal() * total)
        );
        prop_assert!(contribution.distributed_amount() <= benefit);
    }

    /// *For any* benefit, every beneficiary but the last SHALL receive its
    /// share rounded half-up, and no distribution SHALL be negative.
    #[test]
    fn prop_leading_shares_are_rounded_products(
        benefit in benefit(),
        shares in shares_summing_to_one(),
    ) {
        let mut account = account_with(&shares);
        let contribution = account.allocate(benefit).unwrap();
        let distributions: Vec<_> = contribution.distributions().values().collect();

        for (distribution, share) in distributions.iter().zip(&shares).take(shares.len() - 1) {
            prop_assert_eq!(distribution.amount, benefit.multiply_by(*share));
        }
        for distribution in &distributions {
            prop_assert!(!distribution.amount.is_negative());
        }
    }

    /// *For any* benefit, a 50/50 split SHALL differ by at most one cent,
    /// and by zero cents when the benefit is an even number of cents.
    #[test]
    fn prop_even_split(benefit in any_benefit()) {
        let half = Percentage::value_of("50%").unwrap();
        let mut account = account_with(&[half, half]);
        let contribution = account.allocate(benefit).unwrap();

        let first = contribution.distribution("beneficiary-00").unwrap().amount;
        let last = contribution.distribution("beneficiary-01").unwrap().amount;
        let cents = benefit.as_decimal() * Decimal::ONE_HUNDRED;

        prop_assert_eq!(first + last, benefit);
        if cents % Decimal::TWO == Decimal::ZERO {
            prop_assert_eq!(first, last);
        } else {
            prop_assert_eq!(first - last, MonetaryAmount::from_minor_units(1));
        }
    }

    /// *For any* sequence of benefits, savings SHALL equal the sum of
    /// everything distributed to the beneficiary.
    #[test]
    fn prop_savings_track_distributions(
        benefits in prop::collection::vec(benefit(), 1..5),
        shares in shares_summing_to_one(),
    ) {
        let mut account = account_with(&shares);
        let mut expected = vec![MonetaryAmount::zero(); shares.len()];

        for benefit in benefits {
            let contribution = account.allocate(benefit).unwrap();
            for (slot, distribution) in expected.iter_mut().zip(contribution.distributions().values()) {
                *slot += distribution.amount;
            }
        }

        for (beneficiary, savings) in account.beneficiaries().zip(expected) {
            prop_assert_eq!(beneficiary.savings(), savings);
        }
    }

    /// *For any* benefit and 3 to 10 shares totalling 100%, allocation SHALL
    /// either distribute exactly the benefit with no negative amount, or fail
    /// with `NegativeDistribution` leaving the account unchanged; prior
    /// savings SHALL NOT change which of the two happens.
    #[test]
    fn prop_small_benefit_splits_exactly_or_is_rejected(
        benefit in any_benefit(),
        shares in many_shares_summing_to_one(),
        savings in (0i64..100_000i64).prop_map(MonetaryAmount::from_minor_units),
    ) {
        let mut fresh = account_with(&shares);
        let mut funded = account_with_savings(&shares, savings);
        let funded_before = funded.clone();

        let fresh_outcome = fresh.allocate(benefit);
        let funded_outcome = funded.allocate(benefit);

        match funded_outcome {
            Ok(contribution) => {
                prop_assert_eq!(contribution.distributed_amount(), benefit);
                for distribution in contribution.distributions().values() {
                    prop_assert!(!distribution.amount.is_negative());
                }
                let fresh_contribution = fresh_outcome.unwrap();
                for (name, distribution) in contribution.distributions() {
                    prop_assert_eq!(
                        fresh_contribution.distribution(name).map(|d| d.amount),
                        Some(distribution.amount)
                    );
                }
            }
            Err(err) => {
                prop_assert!(
                    matches!(err, AccountError::NegativeDistribution { .. }),
                    "unexpected error: {:?}",
                    err
                );
                prop_assert_eq!(&funded, &funded_before);
                prop_assert_eq!(fresh_outcome.map(|_| ()), Err(err));
            }
        }
    }
}
