//! The shared request pipeline every tool runs through.
//!
//! Method guard, input validation, secret resolution, payload construction,
//! a single upstream call and response translation. Every path ends in an
//! explicit status and JSON body.

use serde_json::Value;
use tracing::{error, info, warn};

use super::helpers;
use super::parsing::{missing_fields, parse_json_body};
use crate::core::config::AppConfig;
use crate::core::models::{ProxyRequest, ProxyResponse};
use crate::errors::ProxyError;
use crate::gemini::extract::embedded_json;
use crate::gemini::{GenerateContentRequest, GenerativeApi, UpstreamReply};
use crate::tools::{PostProcess, ToolConfig};

/// Runs one request for `tool` and renders the outcome.
pub async fn handle(
    request: &ProxyRequest,
    tool: &ToolConfig,
    config: &AppConfig,
    upstream: &dyn GenerativeApi,
) -> ProxyResponse {
    let response = match run(request, tool, config, upstream).await {
        Ok(response) => response,
        Err(e) => {
            if e.status_code() >= 500 {
                error!(tool = tool.name, "Request failed: {}", e);
            } else {
                warn!(tool = tool.name, "Request rejected: {}", e);
            }
            helpers::from_error(&e)
        }
    };

    helpers::finish(tool, response)
}

async fn run(
    request: &ProxyRequest,
    tool: &ToolConfig,
    config: &AppConfig,
    upstream: &dyn GenerativeApi,
) -> Result<ProxyResponse, ProxyError> {
    let method = request.method.as_str();
    if tool.cors && method.eq_ignore_ascii_case("OPTIONS") {
        return Ok(helpers::preflight());
    }
    if !method.eq_ignore_ascii_case("POST") {
        warn!(tool = tool.name, method, "Rejected method");
        return Ok(helpers::method_not_allowed(tool, method));
    }

    let fields = parse_json_body(request.body.as_deref())?;
    let missing = missing_fields(&fields, tool.required_fields);
    if !missing.is_empty() {
        return Err(ProxyError::MissingFields(missing));
    }

    let Some(api_key) = config.google_api_key.as_ref() else {
        return Err(ProxyError::MissingApiKey);
    };

    let payload = GenerateContentRequest::from((tool.build_prompt)(&fields));
    let reply = upstream.generate_content(api_key, &payload).await?;
    info!(tool = tool.name, status = reply.status, "Upstream replied");

    translate(tool, reply)
}

fn translate(tool: &ToolConfig, reply: UpstreamReply) -> Result<ProxyResponse, ProxyError> {
    if !reply.is_success() {
        let reason = reply.error_message().map_or_else(
            || status_reason(reply.status).to_string(),
            ToString::to_string,
        );
        return Err(ProxyError::Upstream {
            status: reply.status,
            message: format!("{}: {}", tool.upstream_error, reason),
            details: if tool.forward_details {
                reply.body
            } else {
                None
            },
        });
    }

    let Some(body) = reply.body else {
        return Err(ProxyError::Transport(format!(
            "upstream returned status {} without a JSON body",
            reply.status
        )));
    };

    match tool.post_process {
        PostProcess::Forward => Ok(helpers::ok_json(body)),
        PostProcess::EmbeddedJson => Ok(helpers::ok_json(Value::Object(embedded_json(&body)?))),
    }
}

fn status_reason(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("unexpected status")
}
