//! Money type for displaying prices.
//!
//! Amounts are held in the currency's minor unit so that formatting never
//! shows floating-point noise.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported storefront currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (paise, cents).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_catalog::money::{Money, Currency};
    /// let price = Money::from_decimal(1299.5, Currency::INR);
    /// assert_eq!(price.amount_minor, 129950);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
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

    /// Format with all decimal places (e.g., "₹1299.00").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// Format dropping a zero fractional part (e.g., "₹1299", "₹1299.50").
    pub fn display_compact(&self) -> String {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        if self.amount_minor % divisor == 0 {
            format!("{}{}", self.currency.symbol(), self.amount_minor / divisor)
        } else {
            self.display()
        }
    }

    /// Difference `self - other`, if the currencies match.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor - other.amount_minor,
            self.currency,
        ))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_compact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);

        let m = Money::from_decimal(100.0, Currency::JPY);
        assert_eq!(m.amount_minor, 100);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(129900, Currency::INR).display(), "\u{20b9}1299.00");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
    }

    #[test]
    fn test_money_display_compact() {
        assert_eq!(Money::new(129900, Currency::INR).display_compact(), "\u{20b9}1299");
        assert_eq!(Money::new(129950, Currency::INR).display_compact(), "\u{20b9}1299.50");
        assert_eq!(Money::zero(Currency::INR).to_string(), "\u{20b9}0");
    }

    #[test]
    fn test_money_subtract_requires_same_currency() {
        let a = Money::new(1000, Currency::INR);
        let b = Money::new(300, Currency::INR);
        assert_eq!(a.try_subtract(&b), Some(Money::new(700, Currency::INR)));
        assert_eq!(a.try_subtract(&Money::new(1, Currency::USD)), None);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code(" USD "), Some(Currency::USD));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
