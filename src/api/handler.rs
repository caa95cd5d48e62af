//! Lambda handler - thin router that picks a tool and runs the proxy pipeline.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use super::{helpers, parsing, proxy};
use crate::core::config::AppConfig;
use crate::errors::ProxyError;
use crate::gemini::{GeminiClient, GenerativeApi};
use crate::tools::{self, ToolConfig};

/// Process-wide state, built once at startup and shared read-only.
pub struct ApiState {
    pub config: AppConfig,
    pub upstream: Box<dyn GenerativeApi>,
    pinned: Option<&'static ToolConfig>,
}

impl ApiState {
    /// # Errors
    ///
    /// Returns an error when `pinned_tool` names no known tool.
    pub fn new(config: AppConfig, upstream: Box<dyn GenerativeApi>) -> Result<Self, String> {
        let pinned = match config.pinned_tool.as_deref() {
            Some(name) => Some(
                tools::find_by_name(name).ok_or_else(|| format!("PROXY_TOOL: unknown tool {name}"))?,
            ),
            None => None,
        };

        Ok(Self {
            config,
            upstream,
            pinned,
        })
    }

    /// State backed by the real Gemini client.
    ///
    /// # Errors
    ///
    /// See [`ApiState::new`].
    pub fn from_config(config: AppConfig) -> Result<Self, String> {
        let upstream = Box::new(GeminiClient::from_config(&config));
        Self::new(config, upstream)
    }

    fn resolve(&self, path: &str) -> Option<&'static ToolConfig> {
        self.pinned.or_else(|| tools::find_by_path(path))
    }
}

/// Routes one Lambda proxy event and returns the proxy-integration response.
pub async fn route_event(state: &ApiState, payload: &Value) -> Value {
    let path = parsing::event_path(payload);
    let Some(tool) = state.resolve(path) else {
        info!(path = %path, "No tool mounted");
        return helpers::from_error(&ProxyError::UnknownRoute(path.to_string())).into_lambda();
    };

    let request = match parsing::parse_event(payload) {
        Ok(request) => request,
        Err(e) => {
            warn!(tool = tool.name, "Rejected event: {}", e);
            return helpers::finish(tool, helpers::from_error(&e)).into_lambda();
        }
    };

    let span = info_span!(
        "proxy",
        request_id = %Uuid::new_v4(),
        tool = tool.name,
        method = %request.method,
        xray_trace_id = request.header("x-amzn-trace-id").unwrap_or(""),
    );

    proxy::handle(&request, tool, &state.config, state.upstream.as_ref())
        .instrument(span)
        .await
        .into_lambda()
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails for a well-formed event; every outcome is an HTTP response.
pub async fn function_handler(state: &ApiState, event: LambdaEvent<Value>) -> Result<Value, Error> {
    #[cfg(feature = "debug-logs")]
    info!("API Lambda received request: {:?}", event.payload);

    Ok(route_event(state, &event.payload).await)
}

pub use self::function_handler as handler;
