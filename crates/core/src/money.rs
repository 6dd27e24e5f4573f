//! Monetary amounts as fixed-point decimals.

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A non-negative amount of money in the store's single currency.
///
/// Backed by [`Decimal`] so sums of prices are exact. Currency formatting is
/// left to presentation code.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Additive identity.
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation(format!(
                "amount cannot be negative (got {amount})"
            )));
        }
        Ok(Self(amount))
    }

    /// Amount from an integer number of minor units (e.g. cents).
    pub fn from_minor(minor: u64) -> DomainResult<Self> {
        let minor = i64::try_from(minor).map_err(|_| {
            DomainError::validation(format!("minor units out of range (got {minor})"))
        })?;
        Self::new(Decimal::new(minor, 2))
    }

    /// `None` if the sum does not fit in a `Decimal`.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Sum that reports overflow instead of panicking.
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> DomainResult<Money> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, Money::checked_add)
            .ok_or_else(|| DomainError::validation("total overflow"))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

/// Panics on overflow, like integer `+`. Use [`Money::checked_add`] for
/// amounts that are not known to be small.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_amounts_are_rejected() {
        let err = Money::new(dec!(-0.01)).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("cannot be negative") => {}
            _ => panic!("Expected Validation error for negative amount"),
        }
    }

    #[test]
    fn equality_is_by_value_not_scale() {
        assert_eq!(Money::new(dec!(10.00)).unwrap(), Money::new(dec!(10)).unwrap());
        assert_eq!(Money::from_minor(1050).unwrap().amount(), dec!(10.50));
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        let empty: Vec<Money> = Vec::new();
        assert_eq!(empty.iter().sum::<Money>(), Money::ZERO);
    }

    #[test]
    fn decimal_sums_are_exact() {
        let total: Money = [dec!(0.10), dec!(0.20)]
            .into_iter()
            .map(|d| Money::new(d).unwrap())
            .sum();
        assert_eq!(total.amount(), dec!(0.30));
    }

    #[test]
    fn from_minor_rejects_values_beyond_i64() {
        let largest = Money::from_minor(i64::MAX as u64).unwrap();
        assert!(!largest.amount().is_sign_negative());

        let err = Money::from_minor(i64::MAX as u64 + 1).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("out of range") => {}
            _ => panic!("Expected Validation error for oversized minor units"),
        }
        assert!(Money::from_minor(u64::MAX).is_err());
    }

    #[test]
    fn checked_add_reports_overflow() {
        let max = Money::new(Decimal::MAX).unwrap();
        assert_eq!(max.checked_add(Money::ZERO), Some(max));
        assert_eq!(max.checked_add(max), None);

        let err = Money::checked_sum([max, max]).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("total overflow") => {}
            _ => panic!("Expected Validation error for overflowing total"),
        }
    }

    #[test]
    fn checked_sum_of_nothing_is_zero() {
        assert_eq!(Money::checked_sum(Vec::<Money>::new()).unwrap(), Money::ZERO);
    }

    proptest! {
        /// Property: Summing money agrees with summing the minor units.
        #[test]
        fn sum_matches_minor_unit_arithmetic(
            cents in prop::collection::vec(0u64..10_000_000u64, 0..50)
        ) {
            let amounts: Vec<Money> = cents.iter().map(|c| Money::from_minor(*c).unwrap()).collect();
            let expected = Money::from_minor(cents.iter().sum()).unwrap();
            prop_assert_eq!(amounts.iter().sum::<Money>(), expected);
            prop_assert_eq!(Money::checked_sum(amounts).unwrap(), expected);
        }
    }
}
