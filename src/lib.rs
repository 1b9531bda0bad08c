//! Async client for the Firecrawl v2 web scraping API.
//!
//! ```no_run
//! use firecrawl_client::{FirecrawlClient, PollOptions};
//! use firecrawl_client::models::{CrawlRequest, ScrapeRequest};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FirecrawlClient::new("fc-YOUR-KEY")?;
//!
//! let page = client
//!     .scrape(&ScrapeRequest::builder().url("https://example.com").build()?)
//!     .await?;
//! println!("{:?}", page.data.markdown);
//!
//! let job = client
//!     .crawl(&CrawlRequest::builder().url("https://example.com").limit(20).build()?)
//!     .await?;
//! let done = client.wait_for_crawl(&job.id, PollOptions::default()).await?;
//! println!("crawled {} pages", done.data.map(|d| d.len()).unwrap_or(0));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod poll;

pub use client::{API_BASE, FirecrawlClient};
pub use crate::config::Config;
pub use credentials::{CredentialsError, load_api_key};
pub use error::{Error, Result};
pub use models::ValidationError;
pub use poll::{JobSnapshot, PollError, PollOptions, poll_until_done};
