//! Cart error types.
//!
//! Rejected submits are not errors here: a failed validation is recorded
//! on the store as a message (see [`CartStore::error`](crate::CartStore::error)).

use thiserror::Error;

/// Errors that can occur outside of ordinary form validation.
#[derive(Error, Debug)]
pub enum CartError {
    /// Field name does not match any known field kind.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// No line item with the given reference.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Currency code not supported.
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CartError {
    fn from(e: toml::de::Error) -> Self {
        CartError::Config(e.to_string())
    }
}
