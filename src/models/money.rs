//! Amount type for representing parking charges
//!
//! Charges are derived from elapsed seconds times a fractional hourly rate,
//! so they are kept at full floating-point precision. Rounding to cents only
//! happens when an amount is formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A monetary amount in currency units (e.g. dollars)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a value in currency units
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value in currency units
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Format with a currency symbol, two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, -self.0)
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Amount::new(10.5)), "$10.50");
        assert_eq!(format!("{}", Amount::zero()), "$0.00");
        assert_eq!(format!("{}", Amount::new(-3.25)), "-$3.25");
        assert_eq!(format!("{}", Amount::new(0.004)), "$0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Amount::new(2.5).format_with_symbol("€"), "€2.50");
        assert_eq!(Amount::new(1.0 / 3.0).format_with_symbol("$"), "$0.33");
    }

    #[test]
    fn test_keeps_full_precision() {
        let a = Amount::new(1.0 / 3.0);
        assert!((a.value() - 0.333_333_333).abs() < 1e-9);
    }

    #[test]
    fn test_sum() {
        let total: Amount = vec![Amount::new(1.25), Amount::new(2.5), Amount::new(0.25)]
            .into_iter()
            .sum();
        assert_eq!(total, Amount::new(4.0));
    }

    #[test]
    fn test_is_checks() {
        assert!(!Amount::zero().is_negative());
        assert!(Amount::new(-0.01).is_negative());
    }
}
