//! Store configuration.

use crate::error::CartError;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Configuration for a [`CartStore`](crate::CartStore).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Currency used when rendering totals.
    #[serde(default)]
    pub currency: Currency,
}

impl StoreConfig {
    /// Create a configuration with the given display currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self { currency }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CartError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_usd() {
        assert_eq!(StoreConfig::default().currency, Currency::USD);
    }

    #[test]
    fn test_from_toml() {
        let config = StoreConfig::from_toml_str("currency = \"EUR\"").unwrap();
        assert_eq!(config.currency, Currency::EUR);

        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = StoreConfig::from_toml_str("currency = \"DOGE\"").unwrap_err();
        assert!(matches!(err, CartError::Config(_)));
    }
}
