//! Structured error types for the study planner
//!
//! Provides type-safe error handling with user-friendly messages and a
//! stable classification the HTTP layer maps onto status codes.

use thiserror::Error;

/// Primary error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    // =========================================================================
    // Request Validation Errors
    // =========================================================================
    /// One or more required request fields are absent
    #[error("missing required fields")]
    MissingFields { required: Vec<&'static str> },

    /// Request is present but fails a validation rule
    #[error("{message}")]
    InvalidRequest { message: String },

    // =========================================================================
    // Provider / API Errors
    // =========================================================================
    /// Authentication/authorization failure from the provider (401)
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Rate limit exceeded (429)
    #[error("rate limit exceeded: {message}")]
    RateLimited { message: String },

    /// Provider reports a decommissioned or unknown model
    #[error("model unavailable: {model}")]
    ModelUnavailable { model: String },

    /// Any other non-success provider status
    #[error("provider error {status}: {message}")]
    Provider { status: u16, message: String },

    /// Reply arrived but no usable JSON plan could be taken from it
    #[error("invalid reply: {reason}")]
    InvalidReply { reason: String },

    /// Every candidate model failed; carries the final failure
    #[error("all models failed. Last error: {last}")]
    AllModelsFailed { last: Box<PlannerError> },

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Internal system error
    #[error("internal error: {message}")]
    Internal { message: String },

    // =========================================================================
    // External Error Wrappers
    // =========================================================================
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl PlannerError {
    /// Shorthand for a validation failure
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// True for failures that should advance the candidate loop rather
    /// than abort it. Validation errors never occur inside the loop.
    pub fn is_candidate_failure(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::RateLimited { .. }
                | Self::ModelUnavailable { .. }
                | Self::Provider { .. }
                | Self::InvalidReply { .. }
                | Self::Http(_)
                | Self::Json(_)
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingFields { .. } => "Missing required fields".to_string(),
            Self::Unauthorized { .. } => "Invalid GROQ API key".to_string(),
            Self::RateLimited { .. } => "Rate limit exceeded".to_string(),
            Self::ModelUnavailable { .. } => "Model deprecated".to_string(),
            Self::AllModelsFailed { .. } => "Failed to generate study plan".to_string(),
            Self::InvalidRequest { message } => message.clone(),
            _ => "Internal server error".to_string(),
        }
    }

    /// Actionable hint for the client, where one exists
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Unauthorized { .. } => Some("Please check your GROQ_API_KEY in the environment"),
            Self::RateLimited { .. } => Some("Please wait a moment and try again"),
            Self::ModelUnavailable { .. } => {
                Some("Please update the candidate model list with latest models")
            }
            Self::AllModelsFailed { .. } => {
                Some("Check https://console.groq.com/docs/models for latest models")
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias using PlannerError
pub type Result<T> = std::result::Result<T, PlannerError>;
