//! Currency metadata and amount formatting.
//!
//! Cart arithmetic runs on `f64` amounts; currencies only decide how a
//! total is rendered.

use crate::error::CartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF ",
        }
    }

    /// Number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> usize {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "CHF" => Some(Currency::CHF),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| CartError::InvalidCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Format an amount with the currency symbol (e.g., "$38.88").
pub fn format_amount(amount: f64, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), format_plain(amount, currency))
}

/// Format an amount without a symbol (e.g., "38.88").
pub fn format_plain(amount: f64, currency: Currency) -> String {
    let places = currency.decimal_places();
    let rendered = format!("{:.places$}", amount);
    // "-0.00" reads badly on a cart total
    if rendered.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        rendered.trim_start_matches('-').to_string()
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(38.88, Currency::USD), "$38.88");
        assert_eq!(format_amount(10.0, Currency::EUR), "\u{20ac}10.00");
        assert_eq!(format_amount(1234.4, Currency::JPY), "\u{00a5}1234");
    }

    #[test]
    fn test_format_rounds_to_two_places() {
        assert_eq!(format_plain(38.879_999_999, Currency::USD), "38.88");
        assert_eq!(format_plain(0.0, Currency::USD), "0.00");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_plain(-0.000_1, Currency::USD), "0.00");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code(" GBP "), Some(Currency::GBP));
        assert_eq!(Currency::from_code("XYZ"), None);
        assert!("XYZ".parse::<Currency>().is_err());
    }
}
