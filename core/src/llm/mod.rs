//! LLM client module
//!
//! Provides the completion backend used by the planner: an
//! OpenAI-compatible chat client pointed at Groq, plus the ordered
//! candidate model list that the bridge walks on failure.

pub mod chat;
pub mod client;

pub use chat::{ChatMessage, MessageRole};
pub use client::{CompletionBackend, GroqClient};

/// Groq's OpenAI-compatible API root
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Candidate models, tried in order until one yields a usable reply
pub const GROQ_MODEL_CANDIDATES: [&str; 6] = [
    "llama-3.3-70b-versatile",
    "llama-3.2-3b-preview",
    "llama-3.2-1b-preview",
    "gemma2-9b-it",
    "llama-3.1-8b-instant",
    "mixtral-8x7b-32768",
];

/// Model advertised as the default on `GET /models`
pub const RECOMMENDED_MODEL: &str = "llama-3.2-3b-preview";

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API endpoint base URL
    pub base_url: String,
    /// API key (if configured)
    pub api_key: Option<String>,
    /// Ordered candidate model identifiers
    pub models: Vec<String>,
    /// Maximum tokens in response
    pub max_tokens: Option<u32>,
    /// Temperature for sampling
    pub temperature: Option<f32>,
    /// Nucleus sampling cutoff
    pub top_p: Option<f32>,
}

impl LlmConfig {
    /// Groq defaults: candidate list above, generous token budget for
    /// multi-course plans
    pub fn groq(api_key: Option<String>) -> Self {
        LlmConfig {
            base_url: GROQ_BASE_URL.to_string(),
            api_key,
            models: GROQ_MODEL_CANDIDATES.iter().map(|m| m.to_string()).collect(),
            max_tokens: Some(6000),
            temperature: Some(0.7),
            top_p: Some(0.9),
        }
    }

    /// Replace the candidate model list
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }
}
