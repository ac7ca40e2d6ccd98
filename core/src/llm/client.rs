//! Groq completion client
//!
//! Thin wrapper over the OpenAI-compatible `/chat/completions` endpoint
//! with provider error classification. The [`CompletionBackend`] trait is
//! the seam the planner talks through, so tests can script replies
//! without a network.

use super::{
    chat::{ChatMessage, ChatRequest, ChatResponse},
    LlmConfig,
};
use crate::error::{PlannerError, Result};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;

/// Per-call timeout; expiry is treated as a candidate failure
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Anything that can turn a model id and a conversation into reply text
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Request a completion from one named model, returning the raw
    /// reply text of the first choice
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String>;
}

/// Groq-backed completion client
pub struct GroqClient {
    config: LlmConfig,
    http_client: HttpClient,
}

impl GroqClient {
    /// Create a new client with the per-call timeout applied
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PlannerError::Internal {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(GroqClient {
            config,
            http_client,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| PlannerError::Unauthorized {
                message: "GROQ_API_KEY is not configured".to_string(),
            })?;

        let url = format!("{}/chat/completions", self.config.base_url);
        let body = ChatRequest {
            model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            stream: false,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let response_body: ChatResponse =
                    response.json().await.map_err(|e| PlannerError::InvalidReply {
                        reason: format!("invalid response structure: {e}"),
                    })?;
                response_body
                    .choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content)
                    .ok_or_else(|| PlannerError::InvalidReply {
                        reason: "response contained no choices".to_string(),
                    })
            }
            StatusCode::UNAUTHORIZED => Err(PlannerError::Unauthorized {
                message: "provider rejected the API key".to_string(),
            }),
            StatusCode::TOO_MANY_REQUESTS => Err(PlannerError::RateLimited {
                message: "provider throttled the request".to_string(),
            }),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                if error_text.contains("model_decommissioned")
                    || error_text.contains("model_not_found")
                {
                    Err(PlannerError::ModelUnavailable {
                        model: model.to_string(),
                    })
                } else {
                    Err(PlannerError::Provider {
                        status: status.as_u16(),
                        message: error_text.chars().take(200).collect(),
                    })
                }
            }
        }
    }
}
