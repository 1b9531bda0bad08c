use reqwest::Url;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be an http/https url, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
    #[error("{0} must be a finite, non-negative number")]
    InvalidNumber(&'static str),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("{0} must be a JSON object")]
    InvalidSchema(&'static str),
    #[error("sitemap mode '{0}' is not supported by this endpoint")]
    UnsupportedSitemap(&'static str),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("job id '{0}' is not a valid path segment")]
    InvalidJobId(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

pub const MAX_PROMPT_CHARS: usize = 10_000;

/// Parses `value` as an absolute http(s) URL and returns its normalized form.
pub fn http_url(field: &'static str, value: &str) -> Result<String> {
    let invalid = || ValidationError::InvalidUrl {
        field,
        value: value.to_string(),
    };

    let url = Url::parse(value.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }

    Ok(url.to_string())
}

pub fn in_range(field: &'static str, value: u64, min: u64, max: u64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub fn non_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(())
}

pub fn prompt(field: &'static str, value: &str) -> Result<()> {
    non_blank(field, value)?;
    if value.chars().count() > MAX_PROMPT_CHARS {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_PROMPT_CHARS,
        });
    }
    Ok(())
}

pub fn json_schema(field: &'static str, schema: Option<&Value>) -> Result<()> {
    match schema {
        Some(value) if !value.is_object() => Err(ValidationError::InvalidSchema(field)),
        _ => Ok(()),
    }
}

/// Job ids are interpolated into the request path, so they must be a single segment.
///
/// Only ASCII letters, digits, `-` and `_` are allowed. Dot segments, `\`
/// and percent escapes would otherwise be normalized into another path.
pub fn job_id(id: &str) -> Result<()> {
    let single_segment = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if id.is_empty() || !single_segment {
        return Err(ValidationError::InvalidJobId(id.to_string()));
    }
    Ok(())
}
