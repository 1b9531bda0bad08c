use bon::bon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::JobStatus;
use super::validation::{self, ValidationError};

/// `POST /agent` request
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRequest {
    prompt: String,
    urls: Option<Vec<String>>,
    schema: Option<Value>,
    max_credits: Option<u64>,
    #[serde(rename = "strictConstrainToURLs")]
    strict_constrain_to_urls: bool,
}

#[bon]
impl AgentRequest {
    #[builder]
    pub fn new(
        #[builder(into)] prompt: String,
        urls: Option<Vec<String>>,
        schema: Option<Value>,
        max_credits: Option<u64>,
        #[builder(default)] strict_constrain_to_urls: bool,
    ) -> Result<Self, ValidationError> {
        validation::prompt("prompt", &prompt)?;
        let urls = urls
            .map(|urls| {
                urls.iter()
                    .map(|url| validation::http_url("urls", url))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        validation::json_schema("schema", schema.as_ref())?;
        if max_credits == Some(0) {
            return Err(ValidationError::OutOfRange {
                field: "maxCredits",
                value: 0,
                min: 1,
                max: u64::MAX,
            });
        }
        if strict_constrain_to_urls && urls.as_ref().is_none_or(Vec::is_empty) {
            return Err(ValidationError::Empty("urls"));
        }

        Ok(Self {
            prompt,
            urls,
            schema,
            max_credits,
            strict_constrain_to_urls,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn urls(&self) -> Option<&[String]> {
        self.urls.as_deref()
    }

    pub fn max_credits(&self) -> Option<u64> {
        self.max_credits
    }

    pub fn strict_constrain_to_urls(&self) -> bool {
        self.strict_constrain_to_urls
    }
}

/// `POST /agent` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentJobResponse {
    pub success: bool,
    pub id: String,
}

/// `GET /agent/{id}` response
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStatusResponse {
    pub success: bool,
    pub status: JobStatus,
    pub data: Option<Value>,
    pub error: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub credits_used: Option<u64>,
}
