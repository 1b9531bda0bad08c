//! Map a site, then scrape the first page found.
//!
//! ```text
//! FIRECRAWL_API_KEY=fc-... cargo run --example quickstart -- https://docs.firecrawl.dev
//! ```

use firecrawl_client::models::{MapRequest, ScrapeRequest};
use firecrawl_client::{Config, FirecrawlClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let site = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://docs.firecrawl.dev".to_string());

    let config = Config::load()?;
    let client = FirecrawlClient::from_config(&config.client)?;

    let map = client
        .map(&MapRequest::builder().url(site.as_str()).limit(10).build()?)
        .await?;
    info!(links = map.links.len(), "Mapped {}", site);

    let Some(first) = map.links.first() else {
        info!("No links found");
        return Ok(());
    };

    let page = client
        .scrape(&ScrapeRequest::builder().url(first.url.as_str()).build()?)
        .await?;
    let markdown = page.data.markdown.unwrap_or_default();
    info!(url = %first.url, chars = markdown.len(), "Scraped page");
    println!("{}", markdown.chars().take(500).collect::<String>());

    client.close();
    Ok(())
}
