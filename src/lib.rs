/// Ferramentas - newsroom AI tools served as one Lambda proxy in front of the
/// Google Gemini API.
///
/// Each tool (headline optimizer, approach generator, broadcast-note rewriter,
/// report drafter, text reviewer, thread summarizer) is a [`tools::ToolConfig`]:
/// required body fields plus a prompt builder. All of them share one pipeline
/// in [`api::proxy`] that validates the request, builds the Gemini payload,
/// makes exactly one upstream call and translates the reply.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (`lambda_runtime`) for serverless execution
/// - reqwest for the upstream call
/// - tracing with a JSON formatter for `CloudWatch` logs
///
/// # Example
///
/// ```no_run
/// use ferramentas::api::{ApiState, route_event};
/// use ferramentas::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     ferramentas::setup_logging();
///
///     let state = ApiState::from_config(AppConfig::with_api_key(Some("dummy_key")))?;
///     let event = serde_json::json!({
///         "rawPath": "/api/generate_thread",
///         "requestContext": { "http": { "method": "POST" } },
///         "body": r#"{"url": "https://example.com/reportagem"}"#,
///     });
///
///     let response = route_event(&state, &event).await;
///     println!("{response}");
///     Ok(())
/// }
/// ```
pub mod api;
pub mod core;
pub mod errors;
pub mod gemini;
pub mod tools;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. Call it once at the start of the Lambda binary.
///
/// # Example
///
/// ```
/// ferramentas::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
