//! Shared fixtures for handler-level tests

#![allow(dead_code)]

use async_trait::async_trait;
use ferramentas::core::config::{ApiKey, AppConfig};
use ferramentas::errors::ProxyError;
use ferramentas::gemini::{GenerateContentRequest, GenerativeApi, UpstreamReply};
use serde_json::{Value, json};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// What the fake upstream answers with.
#[derive(Clone)]
pub enum Scripted {
    Reply(UpstreamReply),
    TransportFailure,
}

/// In-process stand-in for the Gemini API that records every call.
#[derive(Clone)]
pub struct FakeUpstream {
    script: Scripted,
    calls: Arc<Mutex<Vec<GenerateContentRequest>>>,
}

impl FakeUpstream {
    pub fn replying(status: u16, body: Value) -> Self {
        Self {
            script: Scripted::Reply(UpstreamReply {
                status,
                body: Some(body),
            }),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            script: Scripted::TransportFailure,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<GenerateContentRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerativeApi for FakeUpstream {
    async fn generate_content(
        &self,
        _api_key: &ApiKey,
        request: &GenerateContentRequest,
    ) -> Result<UpstreamReply, ProxyError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.script {
            Scripted::Reply(reply) => Ok(reply.clone()),
            Scripted::TransportFailure => {
                Err(ProxyError::Transport("connection refused".to_string()))
            }
        }
    }
}

pub fn config() -> AppConfig {
    AppConfig::with_api_key(Some("test-key"))
}

pub fn config_without_key() -> AppConfig {
    AppConfig::with_api_key(None)
}

/// A Gemini success body whose first candidate answers with `text`.
pub fn candidate_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

/// Body parsed back out of a rendered Lambda response.
pub fn lambda_body(response: &Value) -> Value {
    let raw = response["body"].as_str().unwrap_or("");
    serde_json::from_str(raw).unwrap_or(Value::Null)
}

/// In-memory sink for `tracing` output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's `tracing` events into a buffer until the guard drops.
///
/// Needs the current-thread runtime `#[tokio::test]` uses by default.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    (buffer, tracing::subscriber::set_default(subscriber))
}
