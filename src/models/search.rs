use bon::bon;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use super::scrape::{ScrapeMetadata, ScrapeOptions};
use super::validation::{self, ValidationError};

pub const DEFAULT_SEARCH_LIMIT: u32 = 5;
pub const MAX_SEARCH_LIMIT: u32 = 100;
pub const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Web,
    Images,
    News,
}

impl FromStr for SearchSource {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(SearchSource::Web),
            "images" => Ok(SearchSource::Images),
            "news" => Ok(SearchSource::News),
            other => Err(ValidationError::UnknownVariant {
                kind: "search source",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    Github,
    Research,
    Pdf,
}

/// `POST /search` request
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    query: String,
    limit: u32,
    sources: Vec<SearchSource>,
    categories: Option<Vec<SearchCategory>>,
    tbs: Option<String>,
    location: Option<String>,
    country: String,
    timeout: u64,
    #[serde(rename = "ignoreInvalidURLs")]
    ignore_invalid_urls: bool,
    scrape_options: Option<ScrapeOptions>,
}

#[bon]
impl SearchRequest {
    #[builder]
    pub fn new(
        #[builder(into)] query: String,
        #[builder(default = DEFAULT_SEARCH_LIMIT)] limit: u32,
        #[builder(default = vec![SearchSource::Web])] sources: Vec<SearchSource>,
        categories: Option<Vec<SearchCategory>>,
        #[builder(into)] tbs: Option<String>,
        #[builder(into)] location: Option<String>,
        #[builder(into, default = "US".to_string())] country: String,
        #[builder(default = DEFAULT_SEARCH_TIMEOUT_MS)] timeout: u64,
        #[builder(default)] ignore_invalid_urls: bool,
        scrape_options: Option<ScrapeOptions>,
    ) -> Result<Self, ValidationError> {
        validation::non_blank("query", &query)?;
        validation::in_range("limit", u64::from(limit), 1, u64::from(MAX_SEARCH_LIMIT))?;
        if sources.is_empty() {
            return Err(ValidationError::Empty("sources"));
        }
        validation::non_blank("country", &country)?;
        if let Some(options) = &scrape_options {
            options.validate()?;
        }

        Ok(Self {
            query,
            limit,
            sources,
            categories,
            tbs,
            location,
            country,
            timeout,
            ignore_invalid_urls,
            scrape_options,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn sources(&self) -> &[SearchSource] {
        &self.sources
    }

    pub fn tbs(&self) -> Option<&str> {
        self.tbs.as_deref()
    }
}

/// Web search result
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchWebResult {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub position: Option<u32>,
    pub markdown: Option<String>,
    pub html: Option<String>,
    pub raw_html: Option<String>,
    pub links: Option<Vec<String>>,
    pub screenshot: Option<String>,
    pub metadata: Option<ScrapeMetadata>,
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Image search result
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchImageResult {
    pub title: String,
    pub image_url: String,
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
    pub url: String,
    pub position: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// News search result
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNewsResult {
    pub title: String,
    pub snippet: Option<String>,
    pub url: String,
    pub date: Option<String>,
    pub image_url: Option<String>,
    pub position: u32,
    pub markdown: Option<String>,
    pub html: Option<String>,
    pub raw_html: Option<String>,
    pub links: Option<Vec<String>>,
    pub screenshot: Option<String>,
    pub metadata: Option<ScrapeMetadata>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchData {
    pub web: Option<Vec<SearchWebResult>>,
    pub images: Option<Vec<SearchImageResult>>,
    pub news: Option<Vec<SearchNewsResult>>,
}

/// `POST /search` response
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub data: SearchData,
    pub warning: Option<String>,
    pub id: Option<String>,
    pub credits_used: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_request_minimal() {
        let req = SearchRequest::builder().query("python").build().unwrap();
        assert_eq!(req.query(), "python");
        assert_eq!(req.limit(), 5);
        assert_eq!(req.sources(), &[SearchSource::Web]);

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "query": "python",
                "limit": 5,
                "sources": ["web"],
                "country": "US",
                "timeout": 60000,
                "ignoreInvalidURLs": false
            })
        );
    }

    #[test]
    fn search_request_with_options() {
        let req = SearchRequest::builder()
            .query("news")
            .limit(10)
            .sources(vec![SearchSource::News])
            .tbs("qdr:d")
            .build()
            .unwrap();
        assert_eq!(req.tbs(), Some("qdr:d"));

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["sources"], json!(["news"]));
        assert_eq!(body["tbs"], "qdr:d");
    }

    #[test]
    fn search_request_validation() {
        assert_eq!(
            SearchRequest::builder().query("  ").build().unwrap_err(),
            ValidationError::Empty("query")
        );
        assert!(matches!(
            SearchRequest::builder().query("rust").limit(101).build().unwrap_err(),
            ValidationError::OutOfRange { field: "limit", .. }
        ));
        assert!(matches!(
            SearchRequest::builder().query("rust").limit(0).build().unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
        assert!("maps".parse::<SearchSource>().is_err());
    }

    #[test]
    fn search_response_with_typed_entries() {
        let resp: SearchResponse = serde_json::from_value(json!({
            "success": true,
            "data": {
                "web": [{"title": "Rust", "url": "https://www.rust-lang.org", "position": 1}],
                "images": [{
                    "title": "Ferris",
                    "imageUrl": "https://example.com/ferris.png",
                    "imageWidth": 640,
                    "url": "https://example.com",
                    "position": 1
                }],
                "news": [{"title": "Release", "url": "https://blog.rust-lang.org", "position": 2, "date": "2 days ago"}]
            },
            "creditsUsed": 3
        }))
        .unwrap();

        let web = resp.data.web.as_ref().unwrap();
        assert_eq!(web[0].position, Some(1));
        let images = resp.data.images.as_ref().unwrap();
        assert_eq!(images[0].image_width, Some(640));
        assert_eq!(resp.data.news.as_ref().unwrap()[0].position, 2);
        assert_eq!(resp.credits_used, Some(3));
    }
}
