//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-validator.toml` in current directory
//! 4. `~/.config/sql-validator/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [validation]
//! default_schema = "public"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_VALIDATOR_SCHEMA` | Default target schema for existence checks |
//!
//! The configured schema is only consulted when the caller does not pass
//! one explicitly; it is the fallback, not an override.

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig
}

/// Validation settings
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Schema checked by the existence pass when none is supplied
    #[serde(default = "default_schema")]
    pub default_schema: String
}

fn default_schema() -> String {
    String::from(crate::catalog::DEFAULT_SCHEMA)
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_schema: default_schema()
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-validator.toml)
    /// 3. Config file in home directory (~/.config/sql-validator/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        // Try to load from home directory config
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-validator")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Try to load from current directory config (overrides home config)
        let local_config = PathBuf::from(".sql-validator.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        // Override with environment variables
        if let Ok(schema) = env::var("SQL_VALIDATOR_SCHEMA") {
            config.validation.default_schema = schema;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}
