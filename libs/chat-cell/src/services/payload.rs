// libs/chat-cell/src/services/payload.rs
use serde_json::Value;

/// Result of cleaning an upstream completion: `parsed` is set only when the
/// cleaned text was JSON-delimited and actually parsed; `raw` is always the
/// cleaned text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPayload {
    pub parsed: Option<Value>,
    pub raw: String,
}

/// Best-effort cleanup of a model completion: strips one surrounding
/// triple-backtick fence, then parses as JSON only when the cleaned text is
/// brace/bracket-delimited. Never fails; a bad parse falls back to the
/// cleaned string.
pub fn extract_payload(raw: &str) -> ExtractedPayload {
    let cleaned = strip_code_fence(raw);

    let parsed = if looks_like_json(&cleaned) {
        serde_json::from_str(&cleaned).ok()
    } else {
        None
    };

    ExtractedPayload {
        parsed,
        raw: cleaned,
    }
}

/// Drops a leading ```-fence line (with or without a language tag) and a
/// trailing ``` if present. Text without a fence passes through trimmed.
fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();

    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    // The opening fence runs through the first newline; a one-line fence
    // with no newline is left alone.
    let rest = match trimmed.find('\n') {
        Some(idx) => &trimmed[idx + 1..],
        None => return trimmed.to_string(),
    };

    let rest = rest.trim_end();
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    rest.trim().to_string()
}

fn looks_like_json(text: &str) -> bool {
    (text.starts_with('{') && text.ends_with('}'))
        || (text.starts_with('[') && text.ends_with(']'))
}
