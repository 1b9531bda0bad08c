use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev/v2";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub poll: PollConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Scrapes of slow pages can take minutes, so reads get a longer budget.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
    /// Optional cap on a whole request, unset by default
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// API key (loaded from environment or secret files, never from the config file)
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl ClientConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
            request_timeout_secs: None,
            user_agent: default_user_agent(),
            api_key: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    90
}

fn default_read_timeout_secs() -> u64 {
    300
}

fn default_user_agent() -> String {
    format!("firecrawl-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Defaults for the job polling helpers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub interval_ms: u64,
    pub timeout_secs: Option<u64>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_poll_interval_ms(),
            timeout_secs: None,
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.client.base_url, "https://api.firecrawl.dev/v2");
        assert_eq!(config.client.connect_timeout(), Duration::from_secs(90));
        assert_eq!(config.client.read_timeout(), Duration::from_secs(300));
        assert!(config.client.request_timeout().is_none());
        assert!(config.client.user_agent.starts_with("firecrawl-client/"));
        assert_eq!(config.poll.interval_ms, 2000);
        assert!(config.poll.timeout_secs.is_none());
    }

    #[test]
    fn test_api_key_is_never_serialized() {
        let mut config = Config::default();
        config.client.api_key = Some("fc-secret".to_string());

        let rendered = toml::to_string(&config).unwrap();
        assert!(!rendered.contains("fc-secret"));
    }
}
