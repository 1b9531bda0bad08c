use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::validation::{self, ValidationError};

pub type HeadersMap = BTreeMap<String, String>;

/// Default cache freshness window for scrapes: two days, in milliseconds.
pub const DEFAULT_MAX_AGE_MS: u64 = 172_800_000;

/// Location/proxy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSettings {
    pub country: String,
    pub languages: Vec<String>,
}

impl LocationSettings {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            country: "US".to_string(),
            languages: vec!["en-US".to_string()],
        }
    }
}

/// How the sitemap is used when discovering URLs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SitemapMode {
    #[default]
    Include,
    Skip,
    Only,
}

impl SitemapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SitemapMode::Include => "include",
            SitemapMode::Skip => "skip",
            SitemapMode::Only => "only",
        }
    }
}

impl FromStr for SitemapMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "include" => Ok(SitemapMode::Include),
            "skip" => Ok(SitemapMode::Skip),
            "only" => Ok(SitemapMode::Only),
            other => Err(ValidationError::UnknownVariant {
                kind: "sitemap mode",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SitemapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyMode {
    Basic,
    Stealth,
    #[default]
    Auto,
}

impl FromStr for ProxyMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(ProxyMode::Basic),
            "stealth" => Ok(ProxyMode::Stealth),
            "auto" => Ok(ProxyMode::Auto),
            other => Err(ValidationError::UnknownVariant {
                kind: "proxy mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Events a webhook can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookEvent {
    Started,
    Page,
    Completed,
    Failed,
}

/// Webhook notified as an asynchronous job progresses
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub url: String,
    pub headers: Option<HeadersMap>,
    pub metadata: Option<Value>,
    pub events: Option<Vec<WebhookEvent>>,
}

impl Webhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: None,
            metadata: None,
            events: None,
        }
    }

    pub(crate) fn validate(&self) -> validation::Result<()> {
        validation::http_url("webhook.url", &self.url)?;
        if let Some(metadata) = &self.metadata {
            if !metadata.is_object() {
                return Err(ValidationError::InvalidSchema("webhook.metadata"));
            }
        }
        Ok(())
    }
}

/// Lifecycle state reported by the job status endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Scraping,
    Processing,
    Completed,
    Failed,
    Cancelled,
}

impl JobStatus {
    /// No further transition happens once a job reaches a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Failed | JobStatus::Cancelled
        )
    }
}

/// Response for cancel operations across endpoints.
///
/// Crawl cancellation answers with `status`, batch scrape with `success` and
/// `message`, so every field is optional.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelResponse {
    pub success: Option<bool>,
    pub status: Option<String>,
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sitemap_mode_rejects_unknown_values() {
        assert_eq!("only".parse::<SitemapMode>().unwrap(), SitemapMode::Only);

        let err = "bogus".parse::<SitemapMode>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownVariant {
                kind: "sitemap mode",
                value: "bogus".to_string()
            }
        );
        assert!(serde_json::from_value::<SitemapMode>(json!("bogus")).is_err());
    }

    #[test]
    fn location_defaults() {
        let location = LocationSettings::default();
        assert_eq!(location.country, "US");
        assert_eq!(location.languages, vec!["en-US"]);

        let de = LocationSettings::new("DE").with_languages(["de-DE"]);
        assert_eq!(
            serde_json::to_value(&de).unwrap(),
            json!({"country": "DE", "languages": ["de-DE"]})
        );
    }

    #[test]
    fn terminal_statuses() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
        assert!(!JobStatus::Scraping.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
    }

    #[test]
    fn cancel_response_variants() {
        let crawl: CancelResponse =
            serde_json::from_value(json!({"status": "cancelled"})).unwrap();
        assert_eq!(crawl.status.as_deref(), Some("cancelled"));

        let batch: CancelResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Batch scrape job successfully cancelled."
        }))
        .unwrap();
        assert_eq!(batch.success, Some(true));
    }

    #[test]
    fn webhook_validation() {
        let mut hook = Webhook::new("https://hooks.example.com/firecrawl");
        hook.events = Some(vec![WebhookEvent::Completed]);
        assert!(hook.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&hook).unwrap(),
            json!({"url": "https://hooks.example.com/firecrawl", "events": ["completed"]})
        );

        assert!(Webhook::new("not a url").validate().is_err());
    }
}
