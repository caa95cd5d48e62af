//! Pulling a JSON document out of a model answer.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::errors::ProxyError;

static FENCED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A```(?:json|JSON)?[ \t]*\r?\n?(.*?)\r?\n?[ \t]*```\z")
        .expect("static regex compile")
});

/// Text of the first part of the first candidate.
pub fn candidate_text(body: &Value) -> Option<&str> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Removes one enclosing Markdown code fence, if present.
///
/// Text that is only partly fenced, or holds more than one fence, is
/// rejected rather than guessed at.
pub fn strip_fences(text: &str) -> Result<&str, ProxyError> {
    let trimmed = text.trim();

    let inner = if trimmed.starts_with("```") {
        FENCED_RE
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| ProxyError::Processing("unterminated code fence".to_string()))?
    } else {
        trimmed
    };

    if inner.contains("```") {
        return Err(ProxyError::Processing(
            "answer contains more than one code fence".to_string(),
        ));
    }

    Ok(inner.trim())
}

/// Extracts the JSON object the model was asked to answer with.
pub fn embedded_json(body: &Value) -> Result<Map<String, Value>, ProxyError> {
    let text = candidate_text(body)
        .ok_or_else(|| ProxyError::Processing("response has no candidate text".to_string()))?;

    let inner = strip_fences(text)?;
    match serde_json::from_str::<Value>(inner) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ProxyError::Processing(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ProxyError::Processing(format!("invalid JSON answer: {e}"))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
