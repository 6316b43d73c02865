//! Order-code extraction
//!
//! Order codes arrive through free-text channels (chat, notes), so exact
//! format is unreliable. Two strategies:
//!
//! - **pattern** ([`pattern`]): deterministic scan for codes like `OS-1234`.
//!   Always available, also the fallback.
//! - **assisted** ([`AssistedClient`]): an external text-extraction provider,
//!   used only when the request asks for matcher `"ai"` and a credential is
//!   configured. Any provider failure degrades to the pattern scan; the
//!   caller never sees an extraction error.

mod assisted;
mod pattern;

pub use assisted::{AssistedClient, ExtractError};

use serde::{Deserialize, Serialize};

/// Matcher value that selects the assisted strategy
const MATCHER_AI: &str = "ai";

/// Raw preview length carried in the parse metadata
const PREVIEW_CHARS: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ms,
}

/// A found order code plus where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeMatch {
    pub order_code: String,
    pub reason: &'static str,
}

/// Echo of what was parsed: a truncated preview of the input, the requested
/// matcher and language, and (for a successful assisted pass) the raw
/// provider response.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedMeta {
    pub raw_preview: String,
    pub matcher: String,
    pub lang: Lang,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub parsed: ParsedMeta,
    #[serde(rename = "match")]
    pub matched: Option<CodeMatch>,
}

#[derive(Debug, Clone)]
pub struct CodeExtractor {
    assisted: Option<AssistedClient>,
}

impl CodeExtractor {
    pub fn new(assisted: Option<AssistedClient>) -> Self {
        Self { assisted }
    }

    pub fn has_assisted_extraction(&self) -> bool {
        self.assisted.is_some()
    }

    /// Extract an order code from free text. Never fails: an assisted-pass
    /// error falls back to the pattern scan and only leaves a warning in the
    /// log.
    pub async fn extract(&self, text: &str, matcher: &str, lang: Lang) -> Extraction {
        if matcher == MATCHER_AI
            && let Some(client) = &self.assisted
        {
            match client.extract(text).await {
                Ok(raw) => return assisted_result(text, matcher, lang, raw),
                Err(e) => {
                    tracing::warn!(error = %e, "Assisted extraction failed, falling back to pattern scan");
                }
            }
        }
        pattern::extract(text, matcher, lang)
    }
}

fn assisted_result(text: &str, matcher: &str, lang: Lang, raw: serde_json::Value) -> Extraction {
    let order_code = raw
        .get("order_code")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    Extraction {
        parsed: ParsedMeta {
            raw_preview: preview(text),
            matcher: matcher.to_string(),
            lang,
            extracted: Some(raw),
        },
        matched: order_code.map(|order_code| CodeMatch {
            order_code,
            reason: "ai-extract",
        }),
    }
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
