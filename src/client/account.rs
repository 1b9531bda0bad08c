use super::FirecrawlClient;
use crate::error::Result;
use crate::models::{
    CreditUsageHistoricalResponse, CreditUsageResponse, QueueStatusResponse,
    TokenUsageHistoricalResponse, TokenUsageResponse,
};

fn by_api_key_query(by_api_key: bool) -> Vec<(&'static str, &'static str)> {
    if by_api_key {
        vec![("byApiKey", "true")]
    } else {
        Vec::new()
    }
}

impl FirecrawlClient {
    /// Remaining credits for the team.
    pub async fn get_credit_usage(&self) -> Result<CreditUsageResponse> {
        self.get("/team/credit-usage").await
    }

    /// Credit usage per billing period, optionally split by API key.
    pub async fn get_credit_usage_historical(
        &self,
        by_api_key: bool,
    ) -> Result<CreditUsageHistoricalResponse> {
        self.get_with_query("/team/credit-usage/historical", &by_api_key_query(by_api_key))
            .await
    }

    pub async fn get_token_usage(&self) -> Result<TokenUsageResponse> {
        self.get("/team/token-usage").await
    }

    pub async fn get_token_usage_historical(
        &self,
        by_api_key: bool,
    ) -> Result<TokenUsageHistoricalResponse> {
        self.get_with_query("/team/token-usage/historical", &by_api_key_query(by_api_key))
            .await
    }

    /// Scrape queue depth and concurrency for the team.
    pub async fn get_queue_status(&self) -> Result<QueueStatusResponse> {
        self.get("/team/queue-status").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_only_sent_when_requested() {
        assert!(by_api_key_query(false).is_empty());
        assert_eq!(by_api_key_query(true), vec![("byApiKey", "true")]);
    }
}
