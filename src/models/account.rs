use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditUsageData {
    pub remaining_credits: i64,
    pub plan_credits: i64,
    pub billing_period_start: DateTime<Utc>,
    pub billing_period_end: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET /team/credit-usage` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditUsageResponse {
    pub success: bool,
    pub data: CreditUsageData,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditUsagePeriod {
    pub start_date: String,
    pub end_date: String,
    pub api_key: Option<String>,
    pub total_credits: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET /team/credit-usage/historical` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditUsageHistoricalResponse {
    pub success: bool,
    pub periods: Vec<CreditUsagePeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsageData {
    pub remaining_tokens: i64,
    pub plan_tokens: i64,
    pub billing_period_start: DateTime<Utc>,
    pub billing_period_end: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET /team/token-usage` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenUsageResponse {
    pub success: bool,
    pub data: TokenUsageData,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsagePeriod {
    pub start_date: String,
    pub end_date: String,
    pub api_key: Option<String>,
    pub total_tokens: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET /team/token-usage/historical` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenUsageHistoricalResponse {
    pub success: bool,
    pub periods: Vec<TokenUsagePeriod>,
}

/// `GET /team/queue-status` response
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatusResponse {
    pub success: bool,
    pub jobs_in_queue: u64,
    pub active_jobs_in_queue: u64,
    pub waiting_jobs_in_queue: u64,
    pub max_concurrency: u64,
    pub most_recent_success: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use serde_json::json;

    #[test]
    fn credit_usage_response() {
        let resp: CreditUsageResponse = serde_json::from_value(json!({
            "success": true,
            "data": {
                "remainingCredits": 1,
                "planCredits": 2,
                "billingPeriodStart": "2025-01-01T00:00:00Z",
                "billingPeriodEnd": "2025-01-31T23:59:59Z"
            }
        }))
        .unwrap();
        assert_eq!(resp.data.remaining_credits, 1);
        assert_eq!(resp.data.billing_period_end.day(), 31);
    }

    #[test]
    fn historical_usage_keeps_per_key_breakdown() {
        let resp: TokenUsageHistoricalResponse = serde_json::from_value(json!({
            "success": true,
            "periods": [
                {"startDate": "2025-01-01", "endDate": "2025-01-31", "apiKey": "default", "totalTokens": 900},
                {"startDate": "2025-02-01", "endDate": "2025-02-28", "totalTokens": 30}
            ]
        }))
        .unwrap();
        assert_eq!(resp.periods.len(), 2);
        assert_eq!(resp.periods[0].api_key.as_deref(), Some("default"));
        assert_eq!(resp.periods[1].total_tokens, 30);
    }

    #[test]
    fn queue_status_response() {
        let resp: QueueStatusResponse = serde_json::from_value(json!({
            "success": true,
            "jobsInQueue": 4,
            "activeJobsInQueue": 1,
            "waitingJobsInQueue": 3,
            "maxConcurrency": 2,
            "mostRecentSuccess": null
        }))
        .unwrap();
        assert_eq!(resp.waiting_jobs_in_queue, 3);
        assert!(resp.most_recent_success.is_none());
    }
}
