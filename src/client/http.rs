//! Transport setup and HTTP status mapping

use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Build the pooled HTTP client shared by every call.
pub(crate) fn build_client(api_key: &str, config: &ClientConfig) -> Result<Client> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))
        .map_err(|_| Error::InvalidApiKey)?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder()
        .default_headers(headers)
        .connect_timeout(config.connect_timeout())
        .read_timeout(config.read_timeout())
        .user_agent(&config.user_agent);

    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Map a non-success response onto the error taxonomy.
pub(crate) fn error_for_status(status: StatusCode, headers: &HeaderMap, body: &str) -> Error {
    let message = error_message(status, body);
    match status {
        StatusCode::UNAUTHORIZED => Error::Authentication { message },
        StatusCode::PAYMENT_REQUIRED => Error::PaymentRequired { message },
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited {
            message,
            retry_after: retry_after(headers),
        },
        _ => Error::Api {
            status: status.as_u16(),
            message,
        },
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(Value::String(text)) = map.get(key) {
                if !text.is_empty() {
                    return text.clone();
                }
            }
        }
    }

    let text = body.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    status.canonical_reason().unwrap_or("Unknown").to_string()
}

/// `Retry-After` as delta-seconds or an HTTP-date.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();

    if let Ok(secs) = value.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }

    let at = DateTime::parse_from_rfc2822(value).ok()?.with_timezone(&Utc);
    // A date in the past means "now"
    Some((at - Utc::now()).to_std().unwrap_or(Duration::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_retry_after(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_build_client_rejects_unusable_key() {
        let result = build_client("fc-bad\nkey", &ClientConfig::default());
        assert!(matches!(result, Err(Error::InvalidApiKey)));
    }

    #[test]
    fn test_build_client_with_request_timeout() {
        let config = ClientConfig {
            request_timeout_secs: Some(30),
            ..ClientConfig::default()
        };
        assert!(build_client("fc-test", &config).is_ok());
    }

    #[test]
    fn test_message_prefers_error_field() {
        let err = error_for_status(
            StatusCode::BAD_REQUEST,
            &HeaderMap::new(),
            r#"{"success":false,"error":"Invalid URL","message":"ignored"}"#,
        );
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid URL");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_message_falls_back_to_message_field_then_text() {
        let err = error_for_status(
            StatusCode::NOT_FOUND,
            &HeaderMap::new(),
            r#"{"message":"Job not found"}"#,
        );
        assert_eq!(err.to_string(), "HTTP 404: Job not found");

        let err = error_for_status(
            StatusCode::BAD_GATEWAY,
            &HeaderMap::new(),
            "  upstream exploded \n",
        );
        assert_eq!(err.to_string(), "HTTP 502: upstream exploded");

        let err = error_for_status(StatusCode::SERVICE_UNAVAILABLE, &HeaderMap::new(), "");
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn test_auth_and_payment_statuses() {
        let err = error_for_status(
            StatusCode::UNAUTHORIZED,
            &HeaderMap::new(),
            r#"{"error":"Unauthorized"}"#,
        );
        assert!(matches!(err, Error::Authentication { ref message } if message == "Unauthorized"));

        let err = error_for_status(StatusCode::PAYMENT_REQUIRED, &HeaderMap::new(), "");
        assert!(matches!(err, Error::PaymentRequired { .. }));
    }

    #[test]
    fn test_rate_limited_with_delta_seconds() {
        let err = error_for_status(
            StatusCode::TOO_MANY_REQUESTS,
            &headers_with_retry_after("7"),
            r#"{"error":"Rate limit exceeded"}"#,
        );
        assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_rate_limited_with_http_date() {
        let past = error_for_status(
            StatusCode::TOO_MANY_REQUESTS,
            &headers_with_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"),
            "",
        );
        assert_eq!(past.retry_after(), Some(Duration::ZERO));

        let future = (Utc::now() + chrono::Duration::seconds(120)).to_rfc2822();
        let err = error_for_status(
            StatusCode::TOO_MANY_REQUESTS,
            &headers_with_retry_after(&future),
            "",
        );
        let wait = err.retry_after().unwrap();
        assert!(wait > Duration::from_secs(100) && wait <= Duration::from_secs(120));
    }

    #[test]
    fn test_rate_limited_with_garbage_header() {
        let err = error_for_status(
            StatusCode::TOO_MANY_REQUESTS,
            &headers_with_retry_after("soon"),
            "",
        );
        assert!(matches!(err, Error::RateLimited { retry_after: None, .. }));
    }
}
