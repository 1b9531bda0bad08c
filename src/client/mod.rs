//! Async client for the Firecrawl v2 API
//!
//! One [`FirecrawlClient`] wraps a pooled `reqwest::Client`. Clones share the
//! pool, so a single client can serve many concurrent tasks.

mod account;
mod http;
mod jobs;

use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::credentials;
use crate::error::{Error, Result};
use crate::models::{
    MapRequest, MapResponse, ScrapeRequest, ScrapeResponse, SearchRequest, SearchResponse,
};

pub const API_BASE: &str = DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct FirecrawlClient {
    http: Client,
    base_url: String,
}

impl FirecrawlClient {
    /// Client for the hosted API with default timeouts.
    pub fn new(api_key: impl AsRef<str>) -> Result<Self> {
        Self::with_config(api_key, &ClientConfig::default())
    }

    /// Client with an explicit key and transport settings.
    pub fn with_config(api_key: impl AsRef<str>, config: &ClientConfig) -> Result<Self> {
        let http = http::build_client(api_key.as_ref(), config)?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "Created Firecrawl client");
        Ok(Self { http, base_url })
    }

    /// Client from loaded configuration.
    ///
    /// Uses `config.api_key` when set, otherwise resolves the key from the
    /// environment and the well-known secret files.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        match &config.api_key {
            Some(key) => Self::with_config(key, config),
            None => {
                let key = credentials::load_api_key(None)?;
                Self::with_config(key, config)
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Release this handle. The connection pool closes once every clone is gone.
    pub fn close(self) {
        debug!(base_url = %self.base_url, "Closing Firecrawl client");
    }

    /// Discover URLs on a site (`POST /map`).
    pub async fn map(&self, request: &MapRequest) -> Result<MapResponse> {
        self.post("/map", request).await
    }

    /// Scrape a single page (`POST /scrape`).
    pub async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse> {
        self.post("/scrape", request).await
    }

    /// Web search with optional scraping of results (`POST /search`).
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.post("/search", request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.http.get(self.url(path));
        self.execute(Method::GET, path, builder).await
    }

    async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.http.get(self.url(path)).query(query);
        self.execute(Method::GET, path, builder).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.http.post(self.url(path)).json(body);
        self.execute(Method::POST, path, builder).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.http.delete(self.url(path));
        self.execute(Method::DELETE, path, builder).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T> {
        debug!(%method, endpoint = path, "Sending request");

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        debug!(
            %method,
            endpoint = path,
            status = status.as_u16(),
            size = body.len(),
            "Received response"
        );

        if !status.is_success() {
            let err = http::error_for_status(status, &headers, &body);
            warn!(%method, endpoint = path, status = status.as_u16(), error = %err, "Request failed");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|source| Error::Parse {
            endpoint: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig {
            base_url: "http://localhost:3002/v2/".to_string(),
            ..ClientConfig::default()
        };
        let client = FirecrawlClient::with_config("fc-test", &config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3002/v2");
        assert_eq!(client.url("/map"), "http://localhost:3002/v2/map");
    }

    #[test]
    fn test_default_base_url() {
        let client = FirecrawlClient::new("fc-test").unwrap();
        assert_eq!(client.base_url(), API_BASE);
    }

    #[test]
    fn test_from_config_prefers_configured_key() {
        let config = ClientConfig {
            api_key: Some("fc-from-config".to_string()),
            ..ClientConfig::default()
        };
        assert!(FirecrawlClient::from_config(&config).is_ok());
    }

    #[test]
    fn test_clones_share_settings() {
        let client = FirecrawlClient::new("fc-test").unwrap();
        let clone = client.clone();
        client.close();
        assert_eq!(clone.base_url(), API_BASE);
    }
}
