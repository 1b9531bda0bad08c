use super::FirecrawlClient;
use crate::error::Result;
use crate::models::validation;
use crate::models::{
    ActiveCrawlsResponse, AgentJobResponse, AgentRequest, AgentStatusResponse,
    BatchScrapeJobResponse, BatchScrapeRequest, BatchScrapeStatusResponse, CancelResponse,
    CrawlJobResponse, CrawlParamsPreviewRequest, CrawlParamsPreviewResponse, CrawlRequest,
    CrawlStatusResponse, ExtractJobResponse, ExtractRequest, ExtractStatusResponse,
    JobErrorsResponse,
};

// Crawl

impl FirecrawlClient {
    /// Start a crawl job (`POST /crawl`). Returns as soon as the job is queued.
    pub async fn crawl(&self, request: &CrawlRequest) -> Result<CrawlJobResponse> {
        self.post("/crawl", request).await
    }

    pub async fn get_crawl_status(&self, job_id: &str) -> Result<CrawlStatusResponse> {
        validation::job_id(job_id)?;
        self.get(&format!("/crawl/{job_id}")).await
    }

    pub async fn cancel_crawl(&self, job_id: &str) -> Result<CancelResponse> {
        validation::job_id(job_id)?;
        self.delete(&format!("/crawl/{job_id}")).await
    }

    /// Per-URL failures and robots.txt blocks of a crawl.
    pub async fn get_crawl_errors(&self, job_id: &str) -> Result<JobErrorsResponse> {
        validation::job_id(job_id)?;
        self.get(&format!("/crawl/{job_id}/errors")).await
    }

    /// Crawls currently running for the team.
    pub async fn get_active_crawls(&self) -> Result<ActiveCrawlsResponse> {
        self.get("/crawl/active").await
    }

    /// Ask the server which crawl options it would derive from a prompt.
    pub async fn crawl_params_preview(
        &self,
        request: &CrawlParamsPreviewRequest,
    ) -> Result<CrawlParamsPreviewResponse> {
        self.post("/crawl/params-preview", request).await
    }
}

// Batch scrape

impl FirecrawlClient {
    pub async fn batch_scrape(&self, request: &BatchScrapeRequest) -> Result<BatchScrapeJobResponse> {
        self.post("/batch/scrape", request).await
    }

    pub async fn get_batch_scrape_status(&self, job_id: &str) -> Result<BatchScrapeStatusResponse> {
        validation::job_id(job_id)?;
        self.get(&format!("/batch/scrape/{job_id}")).await
    }

    pub async fn cancel_batch_scrape(&self, job_id: &str) -> Result<CancelResponse> {
        validation::job_id(job_id)?;
        self.delete(&format!("/batch/scrape/{job_id}")).await
    }

    pub async fn get_batch_scrape_errors(&self, job_id: &str) -> Result<JobErrorsResponse> {
        validation::job_id(job_id)?;
        self.get(&format!("/batch/scrape/{job_id}/errors")).await
    }
}

// Extract and agent

impl FirecrawlClient {
    /// Start an LLM extraction job (`POST /extract`).
    pub async fn extract(&self, request: &ExtractRequest) -> Result<ExtractJobResponse> {
        self.post("/extract", request).await
    }

    pub async fn get_extract_status(&self, job_id: &str) -> Result<ExtractStatusResponse> {
        validation::job_id(job_id)?;
        self.get(&format!("/extract/{job_id}")).await
    }

    /// Start an autonomous research job (`POST /agent`).
    pub async fn agent(&self, request: &AgentRequest) -> Result<AgentJobResponse> {
        self.post("/agent", request).await
    }

    pub async fn get_agent_status(&self, job_id: &str) -> Result<AgentStatusResponse> {
        validation::job_id(job_id)?;
        self.get(&format!("/agent/{job_id}")).await
    }

    pub async fn cancel_agent(&self, job_id: &str) -> Result<CancelResponse> {
        validation::job_id(job_id)?;
        self.delete(&format!("/agent/{job_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::ValidationError;

    #[tokio::test]
    async fn test_bad_job_ids_fail_before_sending() {
        // Nothing listens on port 9; a request would surface as a transport error
        let client = FirecrawlClient::with_config(
            "fc-test",
            &crate::config::ClientConfig {
                base_url: "http://127.0.0.1:9/v2".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        let err = client.get_crawl_status("../team").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidJobId(_))
        ));

        let err = client.cancel_agent("").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = client.get_batch_scrape_errors("abc?x=1").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
