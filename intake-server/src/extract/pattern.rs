//! Pattern strategy
//!
//! Order codes look like `OS-1234`: 2-5 uppercase letters, a hyphen,
//! 3-6 digits. The scan runs over the uppercased input, so casing in the
//! source text does not matter.

use std::sync::OnceLock;

use regex::Regex;

use super::{CodeMatch, Extraction, Lang, ParsedMeta};

static CODE_RE: OnceLock<Regex> = OnceLock::new();

fn code_re() -> &'static Regex {
    CODE_RE.get_or_init(|| Regex::new(r"\b([A-Z]{2,5}-\d{3,6})\b").expect("invalid code pattern"))
}

/// First matching code wins; no match leaves `matched` empty.
pub(super) fn extract(text: &str, matcher: &str, lang: Lang) -> Extraction {
    let upper = text.to_uppercase();
    let matched = code_re().captures(&upper).map(|caps| CodeMatch {
        order_code: caps[1].to_string(),
        reason: "regex-match",
    });

    Extraction {
        parsed: ParsedMeta {
            raw_preview: super::preview(text),
            matcher: matcher.to_string(),
            lang,
            extracted: None,
        },
        matched,
    }
}
