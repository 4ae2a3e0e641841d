//! Exact currency amounts in integer cents.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;
use thiserror::Error;

/// A currency amount counted in cents.
///
/// All cart arithmetic happens on the integer count, so repeated additions never
/// drift. Serialized as a decimal string with two fractional digits (`"29.99"`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Money(i64);

/// Reasons a decimal string is not a valid price.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MoneyError {
    #[error("amount is empty")]
    Empty,
    #[error("amount is negative: {0}")]
    Negative(String),
    #[error("amount has more than two decimal places: {0}")]
    TooManyDecimals(String),
    #[error("amount is not a decimal number: {0}")]
    Invalid(String),
    #[error("amount is too large: {0}")]
    Overflow(String),
}

impl Money {
    pub const ZERO: Money = Money(0);
    /// Where arithmetic saturates instead of overflowing.
    pub const MAX: Money = Money(i64::MAX);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Price of `quantity` units, saturating at [`Money::MAX`].
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    // Saturates, so a line or cart total can never wrap around.
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Accepts `"29.99"`, `"29.9"` and `"29"`. Negative amounts are refused.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyError::Empty);
        }
        if s.starts_with('-') {
            return Err(MoneyError::Negative(s.to_string()));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(frac) {
            return Err(MoneyError::Invalid(s.to_string()));
        }
        if s.contains('.') && frac.is_empty() {
            return Err(MoneyError::Invalid(s.to_string()));
        }
        if frac.len() > 2 {
            return Err(MoneyError::TooManyDecimals(s.to_string()));
        }

        let overflow = || MoneyError::Overflow(s.to_string());
        let whole: i64 = whole.parse().map_err(|_| overflow())?;
        // "5" -> 0, "5.9" -> 90, "5.99" -> 99
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => frac.parse::<i64>().map_err(|_| overflow())?,
        };
        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Money)
            .ok_or_else(overflow)
    }
}

impl TryFrom<String> for Money {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_price_shapes() {
        assert_eq!("29.99".parse::<Money>().unwrap(), Money::from_cents(2999));
        assert_eq!("5.9".parse::<Money>().unwrap(), Money::from_cents(590));
        assert_eq!("50".parse::<Money>().unwrap(), Money::from_cents(5000));
        assert_eq!(" 0.05 ".parse::<Money>().unwrap(), Money::from_cents(5));
    }

    #[test]
    fn test_parse_rejects_malformed_prices() {
        assert_eq!("".parse::<Money>(), Err(MoneyError::Empty));
        assert!(matches!("-1.00".parse::<Money>(), Err(MoneyError::Negative(_))));
        assert!(matches!("1.999".parse::<Money>(), Err(MoneyError::TooManyDecimals(_))));
        assert!(matches!("abc".parse::<Money>(), Err(MoneyError::Invalid(_))));
        assert!(matches!("1.".parse::<Money>(), Err(MoneyError::Invalid(_))));
        assert!(matches!(".5".parse::<Money>(), Err(MoneyError::Invalid(_))));
        assert!(matches!("1.2.3".parse::<Money>(), Err(MoneyError::Invalid(_))));
        assert!(matches!(
            "99999999999999999999".parse::<Money>(),
            Err(MoneyError::Overflow(_))
        ));
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Money::from_cents(6498).to_string(), "64.98");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::from_cents(-599).to_string(), "-5.99");
    }

    #[test]
    fn test_repeated_addition_is_exact() {
        // 0.1 added a thousand times drifts as f64; in cents it cannot.
        let dime = Money::from_cents(10);
        let total: Money = std::iter::repeat(dime).take(1000).sum();
        assert_eq!(total, Money::from_cents(10_000));
        assert_eq!(Money::from_cents(2999) * 3, Money::from_cents(8997));
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let huge = "30000000".parse::<Money>().unwrap();
        assert_eq!(huge * u32::MAX, Money::MAX);
        assert_eq!(Money::MAX + Money::from_cents(599), Money::MAX);

        let total: Money = [Money::MAX, Money::MAX, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total, Money::MAX);
        assert_eq!(Money::MAX.to_string(), "92233720368547758.07");
    }

    #[test]
    fn test_serde_uses_decimal_strings() {
        let json = serde_json::to_string(&Money::from_cents(3499)).unwrap();
        assert_eq!(json, "\"34.99\"");
        let back: Money = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(back, Money::from_cents(1250));
        assert!(serde_json::from_str::<Money>("\"-3\"").is_err());
    }
}
