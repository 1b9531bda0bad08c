use bon::bon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::JobStatus;
use super::scrape::ScrapeOptions;
use super::validation::{self, ValidationError};

/// `POST /extract` request
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    urls: Vec<String>,
    prompt: Option<String>,
    schema: Option<Value>,
    enable_web_search: bool,
    ignore_sitemap: bool,
    include_subdomains: bool,
    show_sources: bool,
    scrape_options: Option<ScrapeOptions>,
    #[serde(rename = "ignoreInvalidURLs")]
    ignore_invalid_urls: bool,
}

#[bon]
impl ExtractRequest {
    /// Extraction targets may contain wildcards such as `https://example.com/*`,
    /// so they are only checked for being non-blank.
    #[builder]
    pub fn new(
        urls: Vec<String>,
        #[builder(into)] prompt: Option<String>,
        schema: Option<Value>,
        #[builder(default)] enable_web_search: bool,
        #[builder(default)] ignore_sitemap: bool,
        #[builder(default = true)] include_subdomains: bool,
        #[builder(default)] show_sources: bool,
        scrape_options: Option<ScrapeOptions>,
        #[builder(default = true)] ignore_invalid_urls: bool,
    ) -> Result<Self, ValidationError> {
        if urls.is_empty() {
            return Err(ValidationError::Empty("urls"));
        }
        for url in &urls {
            validation::non_blank("urls", url)?;
        }
        if let Some(prompt) = &prompt {
            validation::prompt("prompt", prompt)?;
        }
        validation::json_schema("schema", schema.as_ref())?;
        if let Some(options) = &scrape_options {
            options.validate()?;
        }

        Ok(Self {
            urls,
            prompt,
            schema,
            enable_web_search,
            ignore_sitemap,
            include_subdomains,
            show_sources,
            scrape_options,
            ignore_invalid_urls,
        })
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn schema(&self) -> Option<&Value> {
        self.schema.as_ref()
    }
}

/// `POST /extract` response
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractJobResponse {
    pub success: bool,
    pub id: String,
    #[serde(rename = "invalidURLs")]
    pub invalid_urls: Option<Vec<String>>,
}

/// `GET /extract/{id}` response
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStatusResponse {
    pub success: bool,
    pub data: Option<Value>,
    pub status: JobStatus,
    pub expires_at: Option<DateTime<Utc>>,
    pub tokens_used: Option<u64>,
    pub credits_used: Option<u64>,
    pub sources: Option<Vec<Value>>,
    pub error: Option<String>,
    pub warning: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
