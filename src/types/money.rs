//! Fixed-point monetary amounts
//!
//! Catalog prices arrive from the backend as decimal numbers. They are held in
//! minor units (hundredths) so that multiplication by month counts and summing
//! combo contributions stays exact. Only discounting goes through floating
//! point, and its result is rounded back to the nearest minor unit.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Minor units per major unit
const MINOR_PER_MAJOR: i64 = 100;

/// A monetary amount in minor units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0);

    /// Build an amount from minor units
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Build an amount from a decimal major-unit value, rounding to the
    /// nearest minor unit. Non-finite input yields zero.
    pub fn from_major(major: f64) -> Self {
        if !major.is_finite() {
            return Self::ZERO;
        }
        Self((major * MINOR_PER_MAJOR as f64).round() as i64)
    }

    /// Amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Amount as a decimal major-unit value
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    /// Whether the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a whole quantity, saturating on overflow
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Scale by a factor and round to the nearest minor unit
    pub fn scaled(self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as i64)
    }

    /// Clamp negative amounts to zero
    pub fn non_negative(self) -> Self {
        Self(self.0.max(0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = MINOR_PER_MAJOR as u64;
        write!(f, "{}{}.{:02}", sign, abs / per, abs % per)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let major = f64::deserialize(deserializer)?;
        Ok(Money::from_major(major))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_rounds_to_minor_units() {
        assert_eq!(Money::from_major(100.0).minor(), 10_000);
        assert_eq!(Money::from_major(19.999).minor(), 2_000);
        assert_eq!(Money::from_major(f64::NAN), Money::ZERO);
        assert_eq!(Money::from_major(f64::INFINITY), Money::ZERO);
    }

    #[test]
    fn test_times_and_sum() {
        let price = Money::from_major(12.5);
        assert_eq!(price.times(4), Money::from_major(50.0));
        let total: Money = vec![price, price, Money::ZERO].into_iter().sum();
        assert_eq!(total, Money::from_major(25.0));
        assert_eq!(Money::from_minor(i64::MAX).times(2).minor(), i64::MAX);
    }

    #[test]
    fn test_scaled_rounds() {
        assert_eq!(Money::from_major(3000.0).scaled(1.0 - 0.15), Money::from_major(2550.0));
        assert_eq!(Money::from_minor(1).scaled(0.5), Money::from_minor(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(2550.0).to_string(), "2550.00");
        assert_eq!(Money::from_minor(-5).to_string(), "-0.05");
        assert_eq!(Money::from_minor(123_456).to_string(), "1234.56");
    }

    #[test]
    fn test_serde_as_major_units() {
        assert_eq!(serde_json::to_string(&Money::from_major(36000.0)).unwrap(), "36000.0");
        let parsed: Money = serde_json::from_str("99.95").unwrap();
        assert_eq!(parsed.minor(), 9_995);
        let integer: Money = serde_json::from_str("500").unwrap();
        assert_eq!(integer, Money::from_major(500.0));
    }
}
