use super::models::{ClientConfig, Config, PollConfig};
use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid base_url '{0}', expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    #[error("Timeout must be positive: {field} = 0")]
    ZeroTimeout { field: &'static str },

    #[error("User agent must not be empty")]
    EmptyUserAgent,

    #[error("Poll interval must be positive")]
    ZeroPollInterval,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_client(&config.client)?;
    validate_poll(&config.poll)?;
    Ok(())
}

fn validate_client(client: &ClientConfig) -> Result<(), ValidationError> {
    let base_url = Url::parse(&client.base_url)
        .map_err(|_| ValidationError::InvalidBaseUrl(client.base_url.clone()))?;
    if !matches!(base_url.scheme(), "http" | "https") || base_url.host_str().is_none() {
        return Err(ValidationError::InvalidBaseUrl(client.base_url.clone()));
    }

    if client.connect_timeout_secs == 0 {
        return Err(ValidationError::ZeroTimeout {
            field: "client.connect_timeout_secs",
        });
    }
    if client.read_timeout_secs == 0 {
        return Err(ValidationError::ZeroTimeout {
            field: "client.read_timeout_secs",
        });
    }
    if client.request_timeout_secs == Some(0) {
        return Err(ValidationError::ZeroTimeout {
            field: "client.request_timeout_secs",
        });
    }

    if client.user_agent.trim().is_empty() {
        return Err(ValidationError::EmptyUserAgent);
    }

    Ok(())
}

fn validate_poll(poll: &PollConfig) -> Result<(), ValidationError> {
    if poll.interval_ms == 0 {
        return Err(ValidationError::ZeroPollInterval);
    }
    if poll.timeout_secs == Some(0) {
        return Err(ValidationError::ZeroTimeout {
            field: "poll.timeout_secs",
        });
    }
    Ok(())
}
