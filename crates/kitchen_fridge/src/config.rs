//! Fridge configuration
//!
//! Configuration can come from a JSON document or from the environment:
//!
//! ```json
//! { "capacity": 250 }
//! ```
//!
//! or `FRIDGE_CAPACITY=250`.

use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::Path;
use thiserror::Error;

/// Capacity used when nothing else is configured
pub const DEFAULT_CAPACITY: u32 = 100;

/// Environment variable holding the capacity
pub const CAPACITY_ENV: &str = "FRIDGE_CAPACITY";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Environment variable present but unusable
    #[error("Invalid value '{value}' for {var}")]
    InvalidEnv { var: String, value: String },

    /// Values that parse but make no sense
    #[error("Invalid fridge configuration: {0}")]
    Invalid(String),
}

/// Fridge configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FridgeConfig {
    /// Maximum total quantity across all stacks
    pub capacity: u32,
}

impl Default for FridgeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl FridgeConfig {
    /// Set capacity
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reject configurations that would produce an unusable fridge
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::debug!("Loaded fridge config from {}", path.display());
        Ok(config)
    }

    /// Read `FRIDGE_CAPACITY`, falling back to the default when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(std::env::var(CAPACITY_ENV))
    }

    fn from_env_var(var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(value) => Self::from_env_value(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidEnv {
                var: CAPACITY_ENV.to_string(),
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    fn from_env_value(value: &str) -> Result<Self, ConfigError> {
        let capacity = value
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidEnv {
                var: CAPACITY_ENV.to_string(),
                value: value.to_string(),
            })?;
        let config = Self::default().with_capacity(capacity);
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
