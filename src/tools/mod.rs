//! Tool configurations: the data that turns the shared proxy pipeline into
//! each newsroom tool.

pub mod prompts;

use serde_json::{Map, Value};

use crate::gemini::PromptSpec;

pub type PromptBuilder = fn(&Map<String, Value>) -> PromptSpec;

/// What happens to a successful upstream body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Return the upstream JSON unchanged.
    Forward,
    /// The answer text is itself a JSON object, possibly fenced in Markdown.
    EmbeddedJson,
}

#[derive(Debug, Clone, Copy)]
pub struct ToolConfig {
    pub name: &'static str,
    /// Matched as a case-insensitive suffix of the request path.
    pub route: &'static str,
    pub required_fields: &'static [&'static str],
    pub build_prompt: PromptBuilder,
    /// Emit CORS headers and answer `OPTIONS` pre-flights.
    pub cors: bool,
    pub post_process: PostProcess,
    /// Include the raw upstream error body as `details`.
    pub forward_details: bool,
    /// Prefix for upstream error messages returned to the caller.
    pub upstream_error: &'static str,
}

impl ToolConfig {
    /// Value for the `Allow` header on 405 responses.
    #[must_use]
    pub fn allowed_methods(&self) -> &'static str {
        if self.cors { "POST, OPTIONS" } else { "POST" }
    }

    fn matches_path(&self, path: &str) -> bool {
        let path = path.trim_end_matches('/').to_ascii_lowercase();
        path.ends_with(&self.route.to_ascii_lowercase())
    }
}

pub static TOOLS: [ToolConfig; 6] = [
    ToolConfig {
        name: "otimizador",
        route: "/api/Otimizador",
        required_fields: &["prompt"],
        build_prompt: prompts::headline_optimizer,
        cors: false,
        post_process: PostProcess::Forward,
        forward_details: false,
        upstream_error: "Google API request failed",
    },
    ToolConfig {
        name: "abordagens",
        route: "/api/Abordagens",
        required_fields: &["userQuery", "systemPrompt"],
        build_prompt: prompts::approach_generator,
        cors: false,
        post_process: PostProcess::Forward,
        forward_details: true,
        upstream_error: "Google API returned an error",
    },
    ToolConfig {
        name: "pratv",
        route: "/api/PraTV",
        required_fields: &["text", "paragraphLimit"],
        build_prompt: prompts::broadcast_note,
        cors: false,
        post_process: PostProcess::EmbeddedJson,
        forward_details: false,
        upstream_error: "Failed to communicate with the Google API",
    },
    ToolConfig {
        name: "rascunhando_bo",
        route: "/api/RascunhandoBO",
        required_fields: &["prompt"],
        build_prompt: prompts::report_draft,
        cors: false,
        post_process: PostProcess::Forward,
        forward_details: true,
        upstream_error: "Failed to communicate with the Google API",
    },
    ToolConfig {
        name: "revisor",
        route: "/api/Revisor",
        required_fields: &["userQuery", "systemPrompt"],
        build_prompt: prompts::text_reviewer,
        cors: true,
        post_process: PostProcess::Forward,
        forward_details: false,
        upstream_error: "Google API returned an error",
    },
    ToolConfig {
        name: "generate_thread",
        route: "/api/generate_thread",
        required_fields: &["url"],
        build_prompt: prompts::thread_summarizer,
        cors: false,
        post_process: PostProcess::Forward,
        forward_details: false,
        upstream_error: "Google API returned an error",
    },
];

#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static ToolConfig> {
    TOOLS.iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}

#[must_use]
pub fn find_by_path(path: &str) -> Option<&'static ToolConfig> {
    TOOLS.iter().find(|t| t.matches_path(path))
}
