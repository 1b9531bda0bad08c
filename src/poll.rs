//! Waiting for asynchronous jobs
//!
//! Crawl, batch scrape, extract and agent jobs are submitted and then polled
//! through their status endpoints. [`poll_until_done`] drives that loop for
//! any status call; the `wait_for_*` methods wire it to the client.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::client::FirecrawlClient;
use crate::config::PollConfig;
use crate::error::Error;
use crate::models::{
    AgentStatusResponse, BatchScrapeStatusResponse, CrawlStatusResponse, ExtractStatusResponse,
    JobStatus, ScrapeJobStatus,
};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Intervals below this are raised to it.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A status snapshot the poll loop can inspect.
pub trait JobSnapshot {
    fn status(&self) -> JobStatus;

    /// Failure reason reported by the server, if any.
    fn error_message(&self) -> Option<&str> {
        None
    }
}

impl JobSnapshot for ScrapeJobStatus {
    fn status(&self) -> JobStatus {
        self.status
    }
}

impl JobSnapshot for ExtractStatusResponse {
    fn status(&self) -> JobStatus {
        self.status
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl JobSnapshot for AgentStatusResponse {
    fn status(&self) -> JobStatus {
        self.status
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Pause between status calls, never shorter than [`MIN_POLL_INTERVAL`].
    pub interval: Duration,
    /// Give up after this long; `None` waits until the job finishes.
    pub timeout: Option<Duration>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }
}

impl PollOptions {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl From<&PollConfig> for PollOptions {
    fn from(config: &PollConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.interval_ms),
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Client(#[from] Error),

    #[error("job {job_id} failed: {message}")]
    Failed { job_id: String, message: String },

    #[error("job {job_id} was cancelled")]
    Cancelled { job_id: String },

    #[error("job {job_id} did not finish within {waited:?}")]
    TimedOut { job_id: String, waited: Duration },
}

/// Call `fetch` until the job reaches a terminal state.
///
/// Returns the completed snapshot. Failed and cancelled jobs, client errors
/// and an elapsed deadline end the loop with the matching [`PollError`].
pub async fn poll_until_done<T, F, Fut>(
    job_id: &str,
    options: PollOptions,
    mut fetch: F,
) -> Result<T, PollError>
where
    T: JobSnapshot,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let started = Instant::now();
    // A timeout too large to represent is the same as no deadline
    let deadline = options
        .timeout
        .and_then(|timeout| started.checked_add(timeout));
    let interval = options.interval.max(MIN_POLL_INTERVAL);
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        let snapshot = fetch().await?;
        let status = snapshot.status();
        debug!(job_id, attempt, ?status, "Polled job status");

        match status {
            JobStatus::Completed => return Ok(snapshot),
            JobStatus::Failed => {
                return Err(PollError::Failed {
                    job_id: job_id.to_string(),
                    message: snapshot
                        .error_message()
                        .unwrap_or("no error message reported")
                        .to_string(),
                });
            }
            JobStatus::Cancelled => {
                return Err(PollError::Cancelled {
                    job_id: job_id.to_string(),
                });
            }
            _ => {}
        }

        if let Some(deadline) = deadline {
            let now = Instant::now();
            if now >= deadline {
                return Err(PollError::TimedOut {
                    job_id: job_id.to_string(),
                    waited: now - started,
                });
            }
            sleep(interval.min(deadline - now)).await;
        } else {
            sleep(interval).await;
        }
    }
}

impl FirecrawlClient {
    pub async fn wait_for_crawl(
        &self,
        job_id: &str,
        options: PollOptions,
    ) -> Result<CrawlStatusResponse, PollError> {
        poll_until_done(job_id, options, || self.get_crawl_status(job_id)).await
    }

    pub async fn wait_for_batch_scrape(
        &self,
        job_id: &str,
        options: PollOptions,
    ) -> Result<BatchScrapeStatusResponse, PollError> {
        poll_until_done(job_id, options, || self.get_batch_scrape_status(job_id)).await
    }

    pub async fn wait_for_extract(
        &self,
        job_id: &str,
        options: PollOptions,
    ) -> Result<ExtractStatusResponse, PollError> {
        poll_until_done(job_id, options, || self.get_extract_status(job_id)).await
    }

    pub async fn wait_for_agent(
        &self,
        job_id: &str,
        options: PollOptions,
    ) -> Result<AgentStatusResponse, PollError> {
        poll_until_done(job_id, options, || self.get_agent_status(job_id)).await
    }
}
