use bon::bon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{JobStatus, SitemapMode, Webhook};
use super::scrape::{ScrapeData, ScrapeOptions};
use super::validation::{self, ValidationError};

pub const DEFAULT_CRAWL_LIMIT: u32 = 10_000;
pub const MAX_CRAWL_LIMIT: u32 = 100_000;

/// `POST /crawl` request
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlRequest {
    url: String,
    prompt: Option<String>,
    exclude_paths: Option<Vec<String>>,
    include_paths: Option<Vec<String>>,
    max_depth: Option<u32>,
    max_discovery_depth: Option<u32>,
    sitemap: SitemapMode,
    ignore_query_parameters: bool,
    #[serde(rename = "deduplicateSimilarURLs")]
    deduplicate_similar_urls: Option<bool>,
    limit: u32,
    crawl_entire_domain: bool,
    allow_external_links: bool,
    allow_subdomains: bool,
    delay: Option<f64>,
    max_concurrency: Option<u32>,
    webhook: Option<Webhook>,
    scrape_options: Option<ScrapeOptions>,
    zero_data_retention: bool,
}

#[bon]
impl CrawlRequest {
    #[builder]
    pub fn new(
        #[builder(into)] url: String,
        #[builder(into)] prompt: Option<String>,
        exclude_paths: Option<Vec<String>>,
        include_paths: Option<Vec<String>>,
        max_depth: Option<u32>,
        max_discovery_depth: Option<u32>,
        #[builder(default)] sitemap: SitemapMode,
        #[builder(default)] ignore_query_parameters: bool,
        deduplicate_similar_urls: Option<bool>,
        #[builder(default = DEFAULT_CRAWL_LIMIT)] limit: u32,
        #[builder(default)] crawl_entire_domain: bool,
        #[builder(default)] allow_external_links: bool,
        #[builder(default)] allow_subdomains: bool,
        delay: Option<f64>,
        max_concurrency: Option<u32>,
        webhook: Option<Webhook>,
        scrape_options: Option<ScrapeOptions>,
        #[builder(default)] zero_data_retention: bool,
    ) -> Result<Self, ValidationError> {
        let url = validation::http_url("url", &url)?;
        if let Some(prompt) = &prompt {
            validation::prompt("prompt", prompt)?;
        }
        if sitemap == SitemapMode::Only {
            return Err(ValidationError::UnsupportedSitemap(sitemap.as_str()));
        }
        validation::in_range("limit", u64::from(limit), 1, u64::from(MAX_CRAWL_LIMIT))?;
        if let Some(delay) = delay {
            if !delay.is_finite() || delay < 0.0 {
                return Err(ValidationError::InvalidNumber("delay"));
            }
        }
        if let Some(max_concurrency) = max_concurrency {
            validation::in_range("maxConcurrency", u64::from(max_concurrency), 1, u64::from(u32::MAX))?;
        }
        if let Some(webhook) = &webhook {
            webhook.validate()?;
        }
        if let Some(options) = &scrape_options {
            options.validate()?;
        }

        Ok(Self {
            url,
            prompt,
            exclude_paths,
            include_paths,
            max_depth,
            max_discovery_depth,
            sitemap,
            ignore_query_parameters,
            deduplicate_similar_urls,
            limit,
            crawl_entire_domain,
            allow_external_links,
            allow_subdomains,
            delay,
            max_concurrency,
            webhook,
            scrape_options,
            zero_data_retention,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn sitemap(&self) -> SitemapMode {
        self.sitemap
    }
}

/// `POST /crawl` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlJobResponse {
    pub success: bool,
    pub id: String,
    pub url: String,
}

/// Status snapshot of a crawl or batch scrape job
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeJobStatus {
    pub status: JobStatus,
    pub total: Option<u64>,
    pub completed: Option<u64>,
    pub credits_used: Option<u64>,
    pub expires_at: Option<DateTime<Utc>>,
    /// URL of the next page of results when the data does not fit one response
    pub next: Option<String>,
    pub data: Option<Vec<ScrapeData>>,
}

/// `GET /crawl/{id}` response
pub type CrawlStatusResponse = ScrapeJobStatus;

/// `POST /crawl/params-preview` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrawlParamsPreviewRequest {
    url: String,
    prompt: String,
}

#[bon]
impl CrawlParamsPreviewRequest {
    #[builder]
    pub fn new(
        #[builder(into)] url: String,
        #[builder(into)] prompt: String,
    ) -> Result<Self, ValidationError> {
        let url = validation::http_url("url", &url)?;
        validation::prompt("prompt", &prompt)?;
        Ok(Self { url, prompt })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Crawl parameters generated from a natural language prompt
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlParamsPreviewData {
    pub url: String,
    pub include_paths: Option<Vec<String>>,
    pub exclude_paths: Option<Vec<String>>,
    pub max_depth: Option<u32>,
    pub max_discovery_depth: Option<u32>,
    pub crawl_entire_domain: Option<bool>,
    pub allow_external_links: Option<bool>,
    pub allow_subdomains: Option<bool>,
    pub sitemap: Option<SitemapMode>,
    pub ignore_query_parameters: Option<bool>,
    #[serde(rename = "deduplicateSimilarURLs")]
    pub deduplicate_similar_urls: Option<bool>,
    pub delay: Option<f64>,
    pub limit: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlParamsPreviewResponse {
    pub success: bool,
    pub data: CrawlParamsPreviewData,
}

/// Error detail from the crawl and batch scrape errors endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobError {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobErrorsResponse {
    pub errors: Vec<JobError>,
    #[serde(default)]
    pub robots_blocked: Vec<String>,
}

/// Active crawl info from `GET /crawl/active`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCrawl {
    pub id: String,
    pub team_id: Option<String>,
    pub url: String,
    pub options: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveCrawlsResponse {
    pub success: bool,
    pub crawls: Vec<ActiveCrawl>,
}
