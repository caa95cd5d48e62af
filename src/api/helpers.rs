//! Response builders shared by the proxy pipeline and the router.

use serde_json::{Value, json};
use std::collections::BTreeMap;

use crate::core::models::ProxyResponse;
use crate::errors::ProxyError;
use crate::tools::ToolConfig;

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

/// Returns a JSON response with the given status.
#[must_use]
pub fn json_response(status: u16, body: Value) -> ProxyResponse {
    ProxyResponse {
        status,
        headers: BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]),
        body: Some(body),
    }
}

/// Returns a 200 OK response with the given JSON body.
#[must_use]
pub fn ok_json(body: Value) -> ProxyResponse {
    json_response(200, body)
}

/// Returns an error response using the `{ error, details? }` envelope.
#[must_use]
pub fn err_response(status: u16, message: &str, details: Option<Value>) -> ProxyResponse {
    let body = match details {
        Some(details) => json!({ "error": message, "details": details }),
        None => json!({ "error": message }),
    };
    json_response(status, body)
}

/// Renders a [`ProxyError`] for the caller.
#[must_use]
pub fn from_error(error: &ProxyError) -> ProxyResponse {
    let details = match error {
        ProxyError::Upstream { details, .. } => details.clone(),
        _ => None,
    };
    err_response(error.status_code(), &error.public_message(), details)
}

/// Returns the 200 answer to a CORS pre-flight.
#[must_use]
pub fn preflight() -> ProxyResponse {
    with_cors(ProxyResponse {
        status: 200,
        headers: BTreeMap::new(),
        body: None,
    })
}

#[must_use]
pub fn with_cors(response: ProxyResponse) -> ProxyResponse {
    response
        .with_header("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN)
        .with_header("Access-Control-Allow-Methods", CORS_ALLOW_METHODS)
        .with_header("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS)
}

/// Returns a 405 naming the rejected method, with an `Allow` header.
#[must_use]
pub fn method_not_allowed(tool: &ToolConfig, method: &str) -> ProxyResponse {
    from_error(&ProxyError::MethodNotAllowed(method.to_string()))
        .with_header("Allow", tool.allowed_methods())
}

/// Adds the headers every response of `tool` carries.
#[must_use]
pub fn finish(tool: &ToolConfig, response: ProxyResponse) -> ProxyResponse {
    if tool.cors { with_cors(response) } else { response }
}
