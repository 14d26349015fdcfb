//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation (pesewas for GHS) to avoid
//! floating-point precision issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Ghanaian cedi.
    #[default]
    GHS,
    /// Nigerian naira.
    NGN,
    /// United States dollar.
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "GHS").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GHS => "GHS",
            Currency::NGN => "NGN",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "\u{20b5}").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::GHS => "\u{20b5}",
            Currency::NGN => "\u{20a6}",
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::GHS | Currency::NGN | Currency::USD => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "GHS" => Some(Currency::GHS),
            "NGN" => Some(Currency::NGN),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., pesewas
/// for GHS). Arithmetic saturates on overflow rather than panicking, so
/// aggregate recomputation can never fail mid-mutation. Mixed-currency
/// arithmetic is not supported; operations keep the left-hand currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., pesewas).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use makola_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(12.5, Currency::GHS);
    /// assert_eq!(price.amount_minor, 1250);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "\u{20b5}12.50").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Add another Money value, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        )
    }

    /// Subtract another Money value, saturating at the numeric bounds.
    pub fn saturating_sub(&self, other: &Money) -> Money {
        Money::new(
            self.amount_minor.saturating_sub(other.amount_minor),
            self.currency,
        )
    }

    /// Multiply by a scalar, saturating at the numeric bounds.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(factor), self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor_units() {
        let m = Money::new(1250, Currency::GHS);
        assert_eq!(m.amount_minor, 1250);
        assert_eq!(m.currency, Currency::GHS);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(12.5, Currency::GHS);
        assert_eq!(m.amount_minor, 1250);

        let m = Money::from_decimal(0.01, Currency::GHS);
        assert_eq!(m.amount_minor, 1);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(1250, Currency::GHS);
        assert!((m.to_decimal() - 12.5).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(1250, Currency::GHS);
        assert_eq!(m.display(), "\u{20b5}12.50");

        let m = Money::new(999, Currency::USD);
        assert_eq!(m.display(), "$9.99");
    }

    #[test]
    fn test_money_saturating_add() {
        let a = Money::new(1000, Currency::GHS);
        let b = Money::new(500, Currency::GHS);
        assert_eq!(a.saturating_add(&b).amount_minor, 1500);

        let max = Money::new(i64::MAX, Currency::GHS);
        assert_eq!(max.saturating_add(&b).amount_minor, i64::MAX);
    }

    #[test]
    fn test_money_saturating_sub() {
        let a = Money::new(1000, Currency::GHS);
        let b = Money::new(300, Currency::GHS);
        assert_eq!(a.saturating_sub(&b).amount_minor, 700);
    }

    #[test]
    fn test_money_saturating_mul() {
        let m = Money::new(1000, Currency::GHS);
        assert_eq!(m.saturating_mul(3).amount_minor, 3000);

        let big = Money::new(i64::MAX / 2, Currency::GHS);
        assert_eq!(big.saturating_mul(4).amount_minor, i64::MAX);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("GHS"), Some(Currency::GHS));
        assert_eq!(Currency::from_code("ngn"), Some(Currency::NGN));
        assert_eq!(Currency::from_code("INVALID"), None);
    }

    #[test]
    fn test_currency_default_is_ghs() {
        assert_eq!(Currency::default(), Currency::GHS);
        assert_eq!(Money::default().currency, Currency::GHS);
    }
}
