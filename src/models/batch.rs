use bon::bon;
use serde::{Deserialize, Serialize};

use super::common::Webhook;
use super::crawl::ScrapeJobStatus;
use super::scrape::ScrapeOptions;
use super::validation::{self, ValidationError};

/// `POST /batch/scrape` request
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchScrapeRequest {
    urls: Vec<String>,
    webhook: Option<Webhook>,
    max_concurrency: Option<u32>,
    #[serde(rename = "ignoreInvalidURLs")]
    ignore_invalid_urls: bool,
    #[serde(flatten)]
    options: ScrapeOptions,
}

#[bon]
impl BatchScrapeRequest {
    #[builder]
    pub fn new(
        urls: Vec<String>,
        #[builder(default)] options: ScrapeOptions,
        webhook: Option<Webhook>,
        max_concurrency: Option<u32>,
        #[builder(default = true)] ignore_invalid_urls: bool,
    ) -> Result<Self, ValidationError> {
        if urls.is_empty() {
            return Err(ValidationError::Empty("urls"));
        }
        let urls = urls
            .iter()
            .map(|url| validation::http_url("urls", url))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(max_concurrency) = max_concurrency {
            validation::in_range("maxConcurrency", u64::from(max_concurrency), 1, u64::from(u32::MAX))?;
        }
        if let Some(webhook) = &webhook {
            webhook.validate()?;
        }
        options.validate()?;

        Ok(Self {
            urls,
            webhook,
            max_concurrency,
            ignore_invalid_urls,
            options: options.with_defaults(),
        })
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }
}

/// `POST /batch/scrape` response
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchScrapeJobResponse {
    pub success: bool,
    pub id: String,
    pub url: String,
    #[serde(rename = "invalidURLs")]
    pub invalid_urls: Option<Vec<String>>,
}

/// `GET /batch/scrape/{id}` response
pub type BatchScrapeStatusResponse = ScrapeJobStatus;
