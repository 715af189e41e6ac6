//! Money type for order totals.
//!
//! Catalog prices arrive as decimals from the store. Totals are computed in
//! integer minor units so that summing many lines does not drift.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies an order can be quoted in. All use 100 minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Egyptian pound; catalog prices are listed in it.
    #[default]
    EGP,
    USD,
    EUR,
}

const MINOR_PER_MAJOR: i64 = 100;

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::EGP, Currency::USD, Currency::EUR];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EGP => "EGP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EGP => "E\u{00a3}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Case-insensitive lookup by ISO code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary amount in minor units (e.g., piastres, cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit. Returns `None` for NaN, infinite or out-of-range input.
    pub fn from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let scaled = (amount * MINOR_PER_MAJOR as f64).round();
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(scaled as i64, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / MINOR_PER_MAJOR as f64
    }

    /// Format as a display string (e.g., "E£49.99").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Add another amount. `None` on overflow or currency mismatch.
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity. `None` on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Half of this amount, rounding half a minor unit up.
    pub fn half(&self) -> Money {
        let amount = self.amount_minor / 2 + self.amount_minor % 2;
        Money::new(amount, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::EGP).unwrap();
        assert_eq!(m.amount_minor, 4999);
        assert!(Money::from_decimal(f64::NAN, Currency::EGP).is_none());
        assert!(Money::from_decimal(f64::INFINITY, Currency::EGP).is_none());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(150, Currency::EGP).to_string(), "E\u{00a3}1.50");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::new(1000, Currency::EGP);
        let b = Money::new(500, Currency::EGP);
        assert_eq!(a.checked_add(&b).unwrap().amount_minor, 1500);
        assert_eq!(a.checked_mul(3).unwrap().amount_minor, 3000);
        assert!(Money::new(i64::MAX, Currency::EGP).checked_mul(2).is_none());
        assert!(a.checked_add(&Money::new(1, Currency::USD)).is_none());
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(Money::new(1000, Currency::EGP).half().amount_minor, 500);
        assert_eq!(Money::new(1001, Currency::EGP).half().amount_minor, 501);
        assert_eq!(Money::zero(Currency::EGP).half(), Money::zero(Currency::EGP));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("egp"), Some(Currency::EGP));
        assert_eq!(Currency::from_code("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::from_code(" usd "), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
