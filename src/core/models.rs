use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Inbound HTTP request, decoupled from the Lambda event shape.
#[derive(Debug, Clone, Default)]
pub struct ProxyRequest {
    pub method: String,
    pub path: String,
    /// Header names are stored lowercased.
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl ProxyRequest {
    #[must_use]
    pub fn post(path: &str, body: &Value) -> Self {
        Self {
            method: "POST".to_string(),
            path: path.to_string(),
            headers: BTreeMap::from([("content-type".to_string(), "application/json".to_string())]),
            body: Some(body.to_string()),
        }
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Outbound HTTP response. `body: None` renders as an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Value>,
}

impl ProxyResponse {
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Renders the Lambda proxy-integration response.
    #[must_use]
    pub fn into_lambda(self) -> Value {
        let body = self.body.map(|b| b.to_string()).unwrap_or_default();
        json!({
            "statusCode": self.status,
            "headers": self.headers,
            "body": body,
        })
    }
}
