//! Gemini `generateContent` client
//!
//! One POST per call, no retries. Non-2xx statuses are returned to the caller
//! as an [`UpstreamReply`]; only transport failures are errors.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use super::payload::GenerateContentRequest;
use crate::core::config::{ApiKey, AppConfig};
use crate::errors::ProxyError;

/// Status and parsed body of an upstream response.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    /// `None` when the body was empty or not JSON.
    pub body: Option<Value>,
}

impl UpstreamReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `error.message` from a Google API error body, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .as_ref()?
            .get("error")?
            .get("message")?
            .as_str()
    }
}

/// Seam between the proxy pipeline and the network.
#[async_trait]
pub trait GenerativeApi: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        request: &GenerateContentRequest,
    ) -> Result<UpstreamReply, ProxyError>;
}

pub struct GeminiClient {
    http: Client,
    api_base: String,
    model: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_base: &str, model: &str) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.gemini_api_base, &config.gemini_model)
    }

    /// Full endpoint URL including the `key` query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Transport`] if the base URL does not parse.
    pub fn endpoint(&self, api_key: &ApiKey) -> Result<Url, ProxyError> {
        let raw = format!("{}/models/{}:generateContent", self.api_base, self.model);
        Url::parse_with_params(&raw, &[("key", api_key.expose())])
            .map_err(|e| ProxyError::Transport(format!("Invalid upstream URL {raw}: {e}")))
    }
}

#[async_trait]
impl GenerativeApi for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        request: &GenerateContentRequest,
    ) -> Result<UpstreamReply, ProxyError> {
        #[cfg(feature = "debug-logs")]
        debug!(
            "Gemini payload: {}",
            serde_json::to_string(request).unwrap_or_default()
        );

        info!(model = %self.model, "Calling generateContent");

        let response = self
            .http
            .post(self.endpoint(api_key)?)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = if text.trim().is_empty() {
            None
        } else {
            match serde_json::from_str::<Value>(&text) {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!(status, "Upstream body is not JSON: {}", e);
                    None
                }
            }
        };

        debug!(status, "generateContent returned");
        Ok(UpstreamReply { status, body })
    }
}
