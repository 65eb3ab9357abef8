//! CLI configuration: cart store settings from `cart.toml` or `cart.json`.

use std::path::Path;

use anyhow::{Context, Result};
use cart_store::StoreConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::Output;

/// File names searched for, in each directory from the cwd upwards.
pub const CONFIG_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

impl CliConfig {
    /// Use the explicit config file if given, otherwise search from the cwd.
    pub fn resolve(explicit: Option<&Path>, output: &Output) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::discover(&cwd, output).unwrap_or_default())
    }

    /// First readable config in `start` or one of its parents.
    ///
    /// Unreadable or malformed files are reported and skipped.
    pub fn discover(start: &Path, output: &Output) -> Option<Self> {
        for dir in start.ancestors() {
            for name in CONFIG_NAMES {
                let path = dir.join(name);
                if !path.is_file() {
                    continue;
                }
                match Self::load(&path) {
                    Ok(config) => {
                        debug!(path = %path.display(), "loaded cart config");
                        return Some(config);
                    }
                    Err(e) => output.warn(&format!("Skipping config: {:#}", e)),
                }
            }
        }
        None
    }

    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(path, &content)
    }

    /// Parse config text; `.json` files are JSON, anything else TOML.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}
