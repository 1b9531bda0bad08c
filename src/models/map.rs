use bon::bon;
use serde::{Deserialize, Serialize};

use super::common::{LocationSettings, SitemapMode};
use super::validation::{self, ValidationError};

pub const DEFAULT_MAP_LIMIT: u32 = 5000;
pub const MAX_MAP_LIMIT: u32 = 100_000;

/// `POST /map` request
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRequest {
    url: String,
    search: Option<String>,
    sitemap: SitemapMode,
    include_subdomains: bool,
    ignore_query_parameters: bool,
    limit: u32,
    location: Option<LocationSettings>,
    timeout: Option<u64>,
}

#[bon]
impl MapRequest {
    #[builder]
    pub fn new(
        #[builder(into)] url: String,
        #[builder(into)] search: Option<String>,
        #[builder(default)] sitemap: SitemapMode,
        #[builder(default = true)] include_subdomains: bool,
        #[builder(default = true)] ignore_query_parameters: bool,
        #[builder(default = DEFAULT_MAP_LIMIT)] limit: u32,
        location: Option<LocationSettings>,
        timeout: Option<u64>,
    ) -> Result<Self, ValidationError> {
        let url = validation::http_url("url", &url)?;
        validation::in_range("limit", u64::from(limit), 1, u64::from(MAX_MAP_LIMIT))?;

        Ok(Self {
            url,
            search,
            sitemap,
            include_subdomains,
            ignore_query_parameters,
            limit,
            location,
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn sitemap(&self) -> SitemapMode {
        self.sitemap
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

/// Individual link in a map response
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// `POST /map` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapResponse {
    pub success: bool,
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn map_request_minimal() {
        let req = MapRequest::builder().url("https://example.com").build().unwrap();
        assert_eq!(req.url(), "https://example.com/");
        assert_eq!(req.limit(), 5000);
        assert_eq!(req.sitemap(), SitemapMode::Include);

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "url": "https://example.com/",
                "sitemap": "include",
                "includeSubdomains": true,
                "ignoreQueryParameters": true,
                "limit": 5000
            })
        );
    }

    #[test]
    fn map_request_with_options() {
        let req = MapRequest::builder()
            .url("https://example.com")
            .search("blog")
            .limit(100)
            .sitemap(SitemapMode::Only)
            .build()
            .unwrap();
        assert_eq!(req.search(), Some("blog"));

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["search"], "blog");
        assert_eq!(body["sitemap"], "only");
        assert_eq!(body["limit"], 100);
        assert!(body.get("location").is_none());
        assert!(body.get("timeout").is_none());
    }

    #[test]
    fn map_request_invalid_url() {
        let err = MapRequest::builder().url("not-a-url").build().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { field: "url", .. }));
    }

    #[test]
    fn map_request_limit_bounds() {
        for limit in [0, MAX_MAP_LIMIT + 1] {
            let err = MapRequest::builder()
                .url("https://example.com")
                .limit(limit)
                .build()
                .unwrap_err();
            assert!(matches!(err, ValidationError::OutOfRange { field: "limit", .. }));
        }
    }

    #[test]
    fn map_response() {
        let resp: MapResponse = serde_json::from_value(json!({
            "success": true,
            "links": [
                {"url": "https://example.com/page1", "title": "Page 1"},
                {"url": "https://example.com/page2"}
            ]
        }))
        .unwrap();
        assert!(resp.success);
        assert_eq!(resp.links.len(), 2);
        assert_eq!(resp.links[0].title.as_deref(), Some("Page 1"));
        assert!(resp.links[1].description.is_none());
    }
}
