use serde_json::Value;
use thiserror::Error;

/// Public message returned whenever the API key is not configured.
pub const MISCONFIGURED_MESSAGE: &str = "Server misconfigured";

/// Public message for transport failures and unexpected upstream bodies.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Public message when an embedded JSON answer cannot be extracted.
pub const PROCESSING_ERROR_MESSAGE: &str = "Failed to process the model response";

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("GOOGLE_API_KEY is not configured")]
    MissingApiKey,

    #[error("Upstream returned status {status}: {message}")]
    Upstream {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    #[error("Failed to reach the generative language API: {0}")]
    Transport(String),

    #[error("Failed to process the model response: {0}")]
    Processing(String),

    #[error("No tool is mounted at {0}")]
    UnknownRoute(String),
}

impl ProxyError {
    /// HTTP status this error is answered with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::MethodNotAllowed(_) => 405,
            ProxyError::InvalidBody(_) | ProxyError::MissingFields(_) => 400,
            ProxyError::UnknownRoute(_) => 404,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::MissingApiKey | ProxyError::Transport(_) | ProxyError::Processing(_) => {
                500
            }
        }
    }

    /// Message safe to hand back to the caller.
    ///
    /// Configuration, transport and processing failures collapse into generic
    /// text; the detailed `Display` output is for the logs only.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            ProxyError::MissingApiKey => MISCONFIGURED_MESSAGE.to_string(),
            ProxyError::Transport(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            ProxyError::Processing(_) => PROCESSING_ERROR_MESSAGE.to_string(),
            ProxyError::Upstream { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(error: reqwest::Error) -> Self {
        // The request URL carries the API key
        ProxyError::Transport(error.without_url().to_string())
    }
}
