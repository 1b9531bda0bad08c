//! Output formats and browser actions for scrape requests.
//!
//! Both are closed sets: a format is either a plain name (`"markdown"`) or an
//! object tagged by `type` (`{"type": "json", "prompt": "..."}`), and an action
//! is always an object tagged by `type`. Unknown names and tags fail to parse.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use super::validation::{self, ValidationError};

/// Formats requested by name only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatKind {
    Markdown,
    Summary,
    Html,
    RawHtml,
    Links,
    Images,
    Screenshot,
    Branding,
}

impl FormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Markdown => "markdown",
            FormatKind::Summary => "summary",
            FormatKind::Html => "html",
            FormatKind::RawHtml => "rawHtml",
            FormatKind::Links => "links",
            FormatKind::Images => "images",
            FormatKind::Screenshot => "screenshot",
            FormatKind::Branding => "branding",
        }
    }
}

impl FromStr for FormatKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "markdown" => FormatKind::Markdown,
            "summary" => FormatKind::Summary,
            "html" => FormatKind::Html,
            "rawHtml" => FormatKind::RawHtml,
            "links" => FormatKind::Links,
            "images" => FormatKind::Images,
            "screenshot" => FormatKind::Screenshot,
            "branding" => FormatKind::Branding,
            other => {
                return Err(ValidationError::UnknownVariant {
                    kind: "format",
                    value: other.to_string(),
                });
            }
        };
        Ok(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeTrackingMode {
    GitDiff,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSelector {
    pub selector: String,
    pub attribute: String,
}

/// Formats that carry options, tagged by `type`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FormatSpec {
    Json {
        schema: Option<Value>,
        prompt: Option<String>,
    },
    Screenshot {
        full_page: Option<bool>,
        quality: Option<u8>,
        viewport: Option<Viewport>,
    },
    ChangeTracking {
        modes: Option<Vec<ChangeTrackingMode>>,
        schema: Option<Value>,
        prompt: Option<String>,
        tag: Option<String>,
    },
    Attributes {
        selectors: Vec<AttributeSelector>,
    },
}

/// One entry of a request's `formats` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Format {
    Plain(FormatKind),
    Spec(FormatSpec),
}

impl Format {
    pub fn markdown() -> Self {
        Format::Plain(FormatKind::Markdown)
    }

    /// Structured extraction guided by a JSON schema, a prompt, or both.
    pub fn json(schema: Option<Value>, prompt: Option<String>) -> Self {
        Format::Spec(FormatSpec::Json { schema, prompt })
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self, Format::Plain(FormatKind::Markdown))
    }

    pub(crate) fn validate(&self) -> validation::Result<()> {
        match self {
            Format::Plain(_) => Ok(()),
            Format::Spec(FormatSpec::Json { schema, prompt }) => {
                if schema.is_none() && prompt.is_none() {
                    return Err(ValidationError::InvalidFormat(
                        "json format needs a schema or a prompt".to_string(),
                    ));
                }
                validation::json_schema("formats.json.schema", schema.as_ref())?;
                if let Some(prompt) = prompt {
                    validation::prompt("formats.json.prompt", prompt)?;
                }
                Ok(())
            }
            Format::Spec(FormatSpec::Screenshot { quality, .. }) => {
                if let Some(quality) = quality {
                    validation::in_range("formats.screenshot.quality", u64::from(*quality), 1, 100)?;
                }
                Ok(())
            }
            Format::Spec(FormatSpec::ChangeTracking { schema, .. }) => {
                validation::json_schema("formats.changeTracking.schema", schema.as_ref())
            }
            Format::Spec(FormatSpec::Attributes { selectors }) => {
                if selectors.is_empty() {
                    return Err(ValidationError::Empty("formats.attributes.selectors"));
                }
                Ok(())
            }
        }
    }
}

impl From<FormatKind> for Format {
    fn from(kind: FormatKind) -> Self {
        Format::Plain(kind)
    }
}

impl From<FormatSpec> for Format {
    fn from(spec: FormatSpec) -> Self {
        Format::Spec(spec)
    }
}

impl FromStr for Format {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<FormatKind>().map(Format::Plain)
    }
}

/// Validates a whole `formats` list, including cross-entry rules.
pub(crate) fn validate_formats(formats: &[Format]) -> validation::Result<()> {
    if formats.is_empty() {
        return Err(ValidationError::Empty("formats"));
    }
    for format in formats {
        format.validate()?;
    }

    let tracks_changes = formats
        .iter()
        .any(|f| matches!(f, Format::Spec(FormatSpec::ChangeTracking { .. })));
    if tracks_changes && !formats.iter().any(Format::is_markdown) {
        return Err(ValidationError::InvalidFormat(
            "changeTracking requires the markdown format".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PdfFormat {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    Letter,
    Legal,
    Tabloid,
    Ledger,
}

/// Browser action performed before the page is captured
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    Wait {
        milliseconds: Option<u64>,
        selector: Option<String>,
    },
    Screenshot {
        full_page: Option<bool>,
        quality: Option<u8>,
        viewport: Option<Viewport>,
    },
    Click {
        selector: String,
        all: Option<bool>,
    },
    Write {
        text: String,
    },
    Press {
        key: String,
    },
    Scroll {
        direction: ScrollDirection,
        selector: Option<String>,
    },
    Scrape,
    ExecuteJavascript {
        script: String,
    },
    Pdf {
        format: Option<PdfFormat>,
        landscape: Option<bool>,
        scale: Option<f32>,
    },
}

impl Action {
    pub fn wait_ms(milliseconds: u64) -> Self {
        Action::Wait {
            milliseconds: Some(milliseconds),
            selector: None,
        }
    }

    pub fn click(selector: impl Into<String>) -> Self {
        Action::Click {
            selector: selector.into(),
            all: None,
        }
    }

    pub(crate) fn validate(&self) -> validation::Result<()> {
        match self {
            Action::Wait {
                milliseconds,
                selector,
            } => match (milliseconds, selector) {
                (Some(_), None) | (None, Some(_)) => Ok(()),
                _ => Err(ValidationError::InvalidAction(
                    "wait needs exactly one of milliseconds or selector".to_string(),
                )),
            },
            Action::Screenshot {
                quality: Some(quality),
                ..
            } => validation::in_range("actions.screenshot.quality", u64::from(*quality), 1, 100),
            Action::Click { selector, .. } => validation::non_blank("actions.click.selector", selector),
            Action::Press { key } => validation::non_blank("actions.press.key", key),
            Action::ExecuteJavascript { script } => {
                validation::non_blank("actions.executeJavascript.script", script)
            }
            _ => Ok(()),
        }
    }
}
