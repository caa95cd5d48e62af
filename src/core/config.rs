use std::env;
use std::fmt;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key, treating blank values as absent.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Missing keys are reported per request, not at startup.
    pub google_api_key: Option<ApiKey>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    /// Pins every request to one tool regardless of path.
    pub pinned_tool: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let gemini_api_base = env::var("GEMINI_API_BASE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string());
        url::Url::parse(&gemini_api_base).map_err(|e| format!("GEMINI_API_BASE: {e}"))?;

        Ok(Self {
            google_api_key: env::var("GOOGLE_API_KEY").ok().and_then(ApiKey::new),
            gemini_model: env::var("GEMINI_MODEL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base,
            pinned_tool: env::var("PROXY_TOOL").ok().filter(|v| !v.trim().is_empty()),
        })
    }

    /// Config with defaults and the given key, used by tests and local runs.
    #[must_use]
    pub fn with_api_key(api_key: Option<&str>) -> Self {
        Self {
            google_api_key: api_key.and_then(ApiKey::new),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            pinned_tool: None,
        }
    }
}
