// src/config.rs
//
// Store configuration
//
// Every key is optional; missing keys fall back to `StoreConfig::default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::RatingPolicy;
use crate::error::{AppError, AppResult};

/// Environment variable holding the path of a JSON config file
pub const CONFIG_ENV_VAR: &str = "MOVIEHUB_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Pre-populate the store with the example catalogue
    pub seed_examples: bool,

    /// Whether the 0-10 rating scale is enforced on add
    pub rating_policy: RatingPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_examples: true,
            rating_policy: RatingPolicy::Hint,
        }
    }
}

impl StoreConfig {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Load from the file named by `MOVIEHUB_CONFIG`, or use defaults
    pub fn from_env() -> AppResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading store config from {:?}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}
