//! Configuration management for the Firecrawl client
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use firecrawl_client::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Talking to: {}", config.client.base_url);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `FIRECRAWL__<section>__<key>`
//!
//! Examples:
//! - `FIRECRAWL__CLIENT__BASE_URL=http://localhost:3002/v2`
//! - `FIRECRAWL__CLIENT__READ_TIMEOUT_SECS=120`
//! - `FIRECRAWL__POLL__INTERVAL_MS=500`
//!
//! The API key is resolved separately by [`crate::credentials`].
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/firecrawl.toml`.
//! This can be overridden using the `FIRECRAWL_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{ClientConfig, Config, DEFAULT_BASE_URL, PollConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`FIRECRAWL__*`)
    /// 2. TOML file (default: `config/firecrawl.toml`)
    /// 3. Default values
    ///
    /// The API key is filled in from `FIRECRAWL_API_KEY` or the secret files.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files. No API key is resolved.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_minimal_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        fs::write(&config_path, "[poll]\ninterval_ms = 250\n").unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.poll.interval_ms, 250);
        assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validation_catches_bad_base_url() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        fs::write(&config_path, "[client]\nbase_url = \"not a url\"\n").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(ValidationError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        fs::write(&config_path, "[client\nbase_url = ").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(result.unwrap_err(), ConfigError::LoadError(_)));
    }
}
