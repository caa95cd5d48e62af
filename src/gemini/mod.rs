//! Gemini generative language API: payload types, client, answer extraction

pub mod client;
pub mod extract;
pub mod payload;

pub use client::{GeminiClient, GenerativeApi, UpstreamReply};
pub use payload::{GenerateContentRequest, PromptSpec, ResponseFormat};
