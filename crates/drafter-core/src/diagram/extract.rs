//! Cleans raw model output down to the `<mxfile>` document.
//!
//! Models wrap structured output in markdown fences or add explanatory
//! prose no matter how firmly the prompt forbids it, so extraction is
//! layered: an ordered list of independent attempts, first success wins,
//! most specific match preferred. Each layer is pure and tested on its
//! own. If nothing matches, the trimmed input passes through unchanged
//! and the validator rejects it downstream.

use std::sync::LazyLock;

use regex::Regex;

const OPEN_TAG: &str = "<mxfile";
const CLOSE_TAG: &str = "</mxfile>";

/// Opening fence with an xml language tag, any case.
static FENCE_XML_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```xml").expect("fence regex"));

/// Comment spans, shortest match per comment, spanning newlines.
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex"));

/// Whole-document span search, shortest match, dot matches newlines.
static MXFILE_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<mxfile.*?</mxfile>").expect("span regex"));

/// Strip fences, comments and surrounding prose; keep the first
/// `<mxfile>...</mxfile>` block.
///
/// Idempotent: running the result through again is a no-op.
pub fn extract(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    if text.contains("```") {
        text = strip_fences(&text);
    }
    text = strip_comments(&text);
    let text = text.trim();

    if let Some(span) = find_tag_span(text) {
        return span.trim().to_string();
    }
    if text.starts_with(OPEN_TAG) {
        return text.to_string();
    }
    if let Some(found) = MXFILE_SPAN_RE.find(text) {
        return found.as_str().trim().to_string();
    }

    // Best-effort passthrough; the validator rejects it.
    text.to_string()
}

/// Remove a language-tagged opening fence and every remaining marker.
fn strip_fences(text: &str) -> String {
    let stripped = FENCE_XML_RE.replace_all(text, "");
    stripped.replace("```", "")
}

/// Remove every `<!-- ... -->` span.
fn strip_comments(text: &str) -> String {
    COMMENT_RE.replace_all(text, "").into_owned()
}

/// Substring from the first open tag through the end of the first close
/// tag after it, if both exist.
fn find_tag_span(text: &str) -> Option<&str> {
    let start = text.find(OPEN_TAG)?;
    let close = text[start..].find(CLOSE_TAG)?;
    let end = start + close + CLOSE_TAG.len();
    Some(&text[start..end])
}
