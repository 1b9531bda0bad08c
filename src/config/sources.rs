use super::models::Config;
use crate::credentials::{self, CredentialsError};
use config::{ConfigError, Environment, File};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "FIRECRAWL_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/firecrawl.toml";
const ENV_PREFIX: &str = "FIRECRAWL";
const ENV_SEPARATOR: &str = "__";

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if exists)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load() -> Result<Config, ConfigError> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config_path = env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = load_from_sources(config_path)?;

    load_secrets(&mut config);

    Ok(config)
}

/// Secrets are never stored in TOML files, only in the environment or secret files
fn load_secrets(config: &mut Config) {
    apply_api_key(config, credentials::load_api_key(None));
}

fn apply_api_key(config: &mut Config, resolved: credentials::Result<String>) {
    match resolved {
        Ok(key) => config.client.api_key = Some(key),
        Err(CredentialsError::NotFound) => {
            tracing::debug!("No API key resolved while loading configuration");
        }
        Err(err) => tracing::warn!(error = %err, "Ignoring unusable API key source"),
    }
}

/// Load configuration from a specific path and environment
/// Useful for testing with custom config files
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            "Configuration file not found at {}, using defaults and environment overrides",
            config_path.display()
        );
    }

    // FIRECRAWL__CLIENT__BASE_URL -> client.base_url
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    config.try_deserialize()
}
