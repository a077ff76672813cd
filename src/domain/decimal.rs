//! Exact money type backed by rust_decimal.
//!
//! Wagers are settled in exact decimal terms. Rounding happens only when an
//! amount is formatted for display.

use rust_decimal::prelude::RoundingStrategy;
use rust_decimal::Decimal as RustDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

/// Signed monetary amount.
///
/// Backed by rust_decimal to avoid floating-point drift.
/// Serializes to JSON number (not string) by default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] RustDecimal);

impl Money {
    pub fn new(value: RustDecimal) -> Self {
        Money(value)
    }

    /// Whole currency units.
    pub fn from_int(units: i64) -> Self {
        Money(RustDecimal::from(units))
    }

    /// Parse an amount from a string losslessly.
    ///
    /// # Errors
    /// Returns an error if the string is not a valid decimal number.
    pub fn from_str_canonical(s: &str) -> Result<Self, rust_decimal::Error> {
        RustDecimal::from_str(s).map(Money)
    }

    /// Format without exponent notation and without trailing zeros.
    pub fn to_canonical_string(&self) -> String {
        let normalized = self.0.normalize();
        format!("{}", normalized)
    }

    /// Format rounded to `scale` decimal places, midpoint away from zero.
    pub fn to_display_string(&self, scale: u32) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        let mut out = rounded;
        out.rescale(scale);
        if out.is_zero() {
            // Avoid "-0.00".
            out.set_sign_positive(true);
        }
        format!("{}", out)
    }

    pub fn inner(&self) -> RustDecimal {
        self.0
    }

    pub fn zero() -> Self {
        Money(RustDecimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.0.is_sign_positive()
    }

    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Scale by an integer factor (points, multipliers, stroke counts).
    /// Saturates at the representable range instead of panicking.
    pub fn times(&self, factor: i64) -> Self {
        Money(self.0.saturating_mul(RustDecimal::from(factor)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<RustDecimal> for Money {
    fn from(value: RustDecimal) -> Self {
        Money(value)
    }
}

impl From<Money> for RustDecimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl std::ops::Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_canonical_no_exponent() {
        let money = Money::from_str_canonical("5.50").expect("parse failed");
        assert_eq!(money.to_canonical_string(), "5.5");
        assert!(!money.to_canonical_string().contains('e'));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_str_canonical("10.5").unwrap();
        let b = Money::from_str_canonical("2.5").unwrap();

        assert_eq!((a + b).to_canonical_string(), "13");
        assert_eq!((a - b).to_canonical_string(), "8");
        assert_eq!(b.times(3).to_canonical_string(), "7.5");
        assert_eq!((-a).to_canonical_string(), "-10.5");
    }

    #[test]
    fn test_money_display_rounding() {
        let m = Money::from_str_canonical("2.345").unwrap();
        assert_eq!(m.to_display_string(2), "2.35");

        let neg = Money::from_str_canonical("-2.345").unwrap();
        assert_eq!(neg.to_display_string(2), "-2.35");

        assert_eq!(Money::from_int(5).to_display_string(2), "5.00");
        assert_eq!(Money::from_int(5).to_display_string(0), "5");
    }

    #[test]
    fn test_money_display_never_negative_zero() {
        let tiny = Money::from_str_canonical("-0.001").unwrap();
        assert_eq!(tiny.to_display_string(2), "0.00");
    }

    #[test]
    fn test_money_json_serialization() {
        let money = Money::from_str_canonical("12.25").unwrap();
        let json = serde_json::to_value(money).unwrap();
        assert!(json.is_number());
        assert_eq!(json.to_string(), "12.25");
    }

    #[test]
    fn test_money_sum() {
        let amounts = vec![Money::from_int(5), Money::from_int(-3), Money::from_int(-2)];
        let total: Money = amounts.iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_money_sign_predicates() {
        assert!(Money::from_int(1).is_positive());
        assert!(Money::from_int(-1).is_negative());
        assert!(!Money::zero().is_positive());
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_huge_products_saturate() {
        let huge = Money::new(RustDecimal::MAX);
        assert_eq!(huge.times(4), huge);
        assert_eq!(huge.times(-4), Money::new(RustDecimal::MIN));
        assert_eq!(huge + huge, huge);
    }
}
