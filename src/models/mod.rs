//! Request and response models for the Firecrawl v2 API.
//!
//! Request models keep their fields private and are only obtainable through a
//! validating builder, so a value that exists is always well formed:
//!
//! ```
//! use firecrawl_client::models::{MapRequest, SitemapMode};
//!
//! let request = MapRequest::builder()
//!     .url("https://example.com")
//!     .sitemap(SitemapMode::Skip)
//!     .limit(100)
//!     .build()
//!     .expect("valid map request");
//! assert_eq!(request.url(), "https://example.com/");
//! ```
//!
//! Fields with a documented default are always sent; optional fields without
//! one are only sent when set. Response models are plain data with public
//! fields. Objects the API may extend keep unknown keys in an `extra` map.
//!
//! # Key Concepts
//!
//! - **Format**: a plain name (`"markdown"`) or a tagged object
//!   (`{"type": "json", "schema": {..}}`); see [`Format`]
//! - **Job**: crawl, batch scrape, extract and agent return an id right away;
//!   the matching status endpoint reports a [`JobStatus`] until it is terminal
//! - **`json_data`**: the `json` field of scrape results, renamed on the Rust side

mod account;
mod agent;
mod batch;
mod common;
mod crawl;
mod extract;
mod formats;
mod map;
mod scrape;
mod search;
pub(crate) mod validation;

pub use account::{
    CreditUsageData, CreditUsageHistoricalResponse, CreditUsagePeriod, CreditUsageResponse,
    QueueStatusResponse, TokenUsageData, TokenUsageHistoricalResponse, TokenUsagePeriod,
    TokenUsageResponse,
};
pub use agent::{AgentJobResponse, AgentRequest, AgentStatusResponse};
pub use batch::{BatchScrapeJobResponse, BatchScrapeRequest, BatchScrapeStatusResponse};
pub use common::{
    CancelResponse, DEFAULT_MAX_AGE_MS, HeadersMap, JobStatus, LocationSettings, ProxyMode,
    SitemapMode, Webhook, WebhookEvent,
};
pub use crawl::{
    ActiveCrawl, ActiveCrawlsResponse, CrawlJobResponse, CrawlParamsPreviewData,
    CrawlParamsPreviewRequest, CrawlParamsPreviewResponse, CrawlRequest, CrawlStatusResponse,
    JobError, JobErrorsResponse, ScrapeJobStatus,
};
pub use extract::{ExtractJobResponse, ExtractRequest, ExtractStatusResponse};
pub use formats::{
    Action, AttributeSelector, ChangeTrackingMode, Format, FormatKind, FormatSpec, PdfFormat,
    ScrollDirection, Viewport,
};
pub use map::{Link, MapRequest, MapResponse};
pub use scrape::{
    ChangeTrackingData, ScrapeData, ScrapeMetadata, ScrapeOptions, ScrapeRequest, ScrapeResponse,
};
pub use search::{
    SearchCategory, SearchData, SearchImageResult, SearchNewsResult, SearchRequest,
    SearchResponse, SearchSource, SearchWebResult,
};
pub use validation::ValidationError;
