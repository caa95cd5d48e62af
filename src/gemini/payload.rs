//! Request body for the Gemini `generateContent` endpoint.

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Tool {
    pub google_search: Map<String, Value>,
}

impl Tool {
    #[must_use]
    pub fn google_search() -> Self {
        Self {
            google_search: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

/// How the model is asked to shape its answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseFormat {
    Text,
    Json,
    JsonSchema(Value),
}

impl ResponseFormat {
    fn generation_config(self) -> Option<GenerationConfig> {
        match self {
            ResponseFormat::Text => None,
            ResponseFormat::Json => Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: None,
            }),
            ResponseFormat::JsonSchema(schema) => Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Some(schema),
            }),
        }
    }
}

/// Output of a tool's prompt builder.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub user_text: String,
    pub system_text: Option<String>,
    pub search_tool: bool,
    pub response_format: ResponseFormat,
}

impl PromptSpec {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            user_text: text.into(),
            system_text: None,
            search_tool: false,
            response_format: ResponseFormat::Text,
        }
    }

    #[must_use]
    pub fn system(mut self, text: impl Into<String>) -> Self {
        self.system_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_search(mut self) -> Self {
        self.search_tool = true;
        self
    }

    #[must_use]
    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }
}

impl From<PromptSpec> for GenerateContentRequest {
    fn from(spec: PromptSpec) -> Self {
        Self {
            contents: vec![Content::text(spec.user_text)],
            system_instruction: spec.system_text.map(Content::text),
            tools: spec.search_tool.then(|| vec![Tool::google_search()]),
            generation_config: spec.response_format.generation_config(),
        }
    }
}
