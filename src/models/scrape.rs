use bon::bon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{DEFAULT_MAX_AGE_MS, HeadersMap, LocationSettings, ProxyMode};
use super::formats::{Action, Format, validate_formats};
use super::validation::{self, ValidationError};

/// Scrape knobs shared by every endpoint that fetches pages.
///
/// Nested under `scrapeOptions` (crawl, search, extract) only the fields that
/// are set go on the wire. Scrape and batch scrape requests flatten these into
/// the top-level body and fill the documented defaults first.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeOptions {
    pub formats: Option<Vec<Format>>,
    pub only_main_content: Option<bool>,
    pub include_tags: Option<Vec<String>>,
    pub exclude_tags: Option<Vec<String>>,
    /// Accept a cached copy younger than this many milliseconds; `0` forces a fresh fetch.
    pub max_age: Option<u64>,
    pub headers: Option<HeadersMap>,
    pub wait_for: Option<u64>,
    pub mobile: Option<bool>,
    pub skip_tls_verification: Option<bool>,
    pub timeout: Option<u64>,
    pub parsers: Option<Vec<String>>,
    pub actions: Option<Vec<Action>>,
    pub location: Option<LocationSettings>,
    pub remove_base64_images: Option<bool>,
    pub block_ads: Option<bool>,
    pub proxy: Option<ProxyMode>,
    pub store_in_cache: Option<bool>,
    pub zero_data_retention: Option<bool>,
}

impl ScrapeOptions {
    pub fn validate(&self) -> validation::Result<()> {
        if let Some(formats) = &self.formats {
            validate_formats(formats)?;
        }
        for action in self.actions.iter().flatten() {
            action.validate()?;
        }
        if let (Some(wait_for), Some(timeout)) = (self.wait_for, self.timeout) {
            if wait_for >= timeout {
                return Err(ValidationError::OutOfRange {
                    field: "waitFor",
                    value: wait_for,
                    min: 0,
                    max: timeout.saturating_sub(1),
                });
            }
        }
        Ok(())
    }

    /// Fills every unset field that has a documented default.
    pub fn with_defaults(self) -> Self {
        Self {
            formats: self.formats.or_else(|| Some(vec![Format::markdown()])),
            only_main_content: self.only_main_content.or(Some(true)),
            max_age: self.max_age.or(Some(DEFAULT_MAX_AGE_MS)),
            wait_for: self.wait_for.or(Some(0)),
            mobile: self.mobile.or(Some(false)),
            skip_tls_verification: self.skip_tls_verification.or(Some(true)),
            remove_base64_images: self.remove_base64_images.or(Some(true)),
            block_ads: self.block_ads.or(Some(true)),
            proxy: self.proxy.or(Some(ProxyMode::Auto)),
            store_in_cache: self.store_in_cache.or(Some(true)),
            zero_data_retention: self.zero_data_retention.or(Some(false)),
            ..self
        }
    }
}

/// `POST /scrape` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeRequest {
    url: String,
    #[serde(flatten)]
    options: ScrapeOptions,
}

#[bon]
impl ScrapeRequest {
    #[builder]
    pub fn new(
        #[builder(into)] url: String,
        #[builder(default)] options: ScrapeOptions,
    ) -> Result<Self, ValidationError> {
        let url = validation::http_url("url", &url)?;
        options.validate()?;

        Ok(Self {
            url,
            options: options.with_defaults(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }
}

/// Metadata from a scrape response
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "sourceURL")]
    pub source_url: Option<String>,
    pub keywords: Option<String>,
    #[serde(default)]
    pub og_locale_alternate: Vec<String>,
    pub status_code: Option<u16>,
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Change tracking information from scrape responses
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeTrackingData {
    pub previous_scrape_at: Option<DateTime<Utc>>,
    pub change_status: Option<String>,
    pub visibility: Option<String>,
    pub diff: Option<Value>,
    #[serde(rename = "json")]
    pub json_data: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Page content returned by scrape, and per page by crawl and batch scrape
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeData {
    pub markdown: Option<String>,
    pub summary: Option<String>,
    pub html: Option<String>,
    pub raw_html: Option<String>,
    pub links: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub screenshot: Option<String>,
    #[serde(rename = "json")]
    pub json_data: Option<Value>,
    pub branding: Option<Value>,
    pub actions: Option<Value>,
    pub metadata: Option<ScrapeMetadata>,
    pub warning: Option<String>,
    pub change_tracking: Option<ChangeTrackingData>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `POST /scrape` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub success: bool,
    pub data: ScrapeData,
}
