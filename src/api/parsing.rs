use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::core::models::ProxyRequest;
use crate::errors::ProxyError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Request path of an event, `/` when none is present.
pub fn event_path(payload: &Value) -> &str {
    v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .or_else(|| v_str(payload, &["requestContext", "http", "path"]))
        .unwrap_or("/")
}

/// Builds a [`ProxyRequest`] from an API Gateway (REST or HTTP API) or
/// function URL event.
///
/// # Errors
///
/// Returns [`ProxyError::InvalidBody`] when a base64 body cannot be decoded.
pub fn parse_event(payload: &Value) -> Result<ProxyRequest, ProxyError> {
    let method = v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("")
        .to_ascii_uppercase();

    let path = event_path(payload).to_string();

    let headers: BTreeMap<String, String> = payload
        .get("headers")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.to_ascii_lowercase(), v.to_string())))
                .collect()
        })
        .unwrap_or_default();

    let body = match payload.get("body").and_then(Value::as_str) {
        Some(raw) if is_base64(payload) => Some(decode_base64_body(raw)?),
        Some(raw) => Some(raw.to_string()),
        None => None,
    };

    Ok(ProxyRequest {
        method,
        path,
        headers,
        body,
    })
}

fn is_base64(payload: &Value) -> bool {
    payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn decode_base64_body(raw: &str) -> Result<String, ProxyError> {
    let bytes = STANDARD
        .decode(raw.trim())
        .map_err(|e| ProxyError::InvalidBody(format!("body is not valid base64: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| ProxyError::InvalidBody(format!("body is not valid UTF-8: {e}")))
}

/// Parses the request body into a JSON object.
///
/// # Errors
///
/// Returns [`ProxyError::InvalidBody`] for empty, non-JSON or non-object bodies.
pub fn parse_json_body(body: Option<&str>) -> Result<Map<String, Value>, ProxyError> {
    let raw = body
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .ok_or_else(|| ProxyError::InvalidBody("request body is empty".to_string()))?;

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ProxyError::InvalidBody(
            "request body must be a JSON object".to_string(),
        )),
        Err(e) => Err(ProxyError::InvalidBody(format!("malformed JSON: {e}"))),
    }
}

/// JavaScript truthiness: `null`, `false`, `0` and `""` count as absent.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Required fields that are absent or falsy, in the order given.
#[must_use]
pub fn missing_fields(fields: &Map<String, Value>, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !fields.get(**name).is_some_and(is_truthy))
        .map(|name| (*name).to_string())
        .collect()
}
