use std::time::Duration;
use thiserror::Error;

use crate::config::ConfigError;
use crate::credentials::CredentialsError;
use crate::models::ValidationError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),
    #[error("authentication failed (HTTP 401): {message}")]
    Authentication { message: String },
    #[error("payment required (HTTP 402): {message}")]
    PaymentRequired { message: String },
    #[error("rate limit exceeded (HTTP 429): {message}")]
    RateLimited {
        message: String,
        retry_after: Option<Duration>,
    },
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("failed to parse {endpoint} response: {source}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API key cannot be used as a header value")]
    InvalidApiKey,
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status of the failed call, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { .. } => Some(401),
            Error::PaymentRequired { .. } => Some(402),
            Error::RateLimited { .. } => Some(429),
            Error::Api { status, .. } => Some(*status),
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Whether repeating the same call later may succeed.
    ///
    /// The client never retries on its own; callers use this to drive their own backoff.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimited { .. } => true,
            Error::Api { status, .. } => *status >= 500,
            Error::Transport(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }
}
