//! Mapping planner errors onto the HTTP error contract
//!
//! Every error response shares a stable JSON shape:
//! `{ success: false, error, message, timestamp, ...hints }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use study_planner_core::PlannerError;

/// Wrapper making [`PlannerError`] usable as an axum response
#[derive(Debug)]
pub struct ApiError(pub PlannerError);

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        ApiError(err)
    }
}

/// Status code for the terminal failure class. Exhaustion unwraps to the
/// last candidate's error so credential and throttling failures keep
/// their own codes.
fn status_for(err: &PlannerError) -> StatusCode {
    match err {
        PlannerError::MissingFields { .. }
        | PlannerError::InvalidRequest { .. }
        | PlannerError::ModelUnavailable { .. } => StatusCode::BAD_REQUEST,
        PlannerError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        PlannerError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        PlannerError::AllModelsFailed { last } => status_for(last),
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(&err);

        // Classify on the terminal failure, but keep the full chain in
        // the message so exhaustion reports the last underlying error.
        // Exhaustion on a structural failure stays the generic
        // generation-failure category; exhaustion on a credential,
        // throttling or decommissioned-model failure keeps its own.
        let terminal = match &err {
            PlannerError::AllModelsFailed { last } => match last.as_ref() {
                t @ (PlannerError::Unauthorized { .. }
                | PlannerError::RateLimited { .. }
                | PlannerError::ModelUnavailable { .. }) => t,
                _ => &err,
            },
            other => other,
        };

        let mut body = json!({
            "success": false,
            "error": terminal.user_message(),
            "message": err.to_string(),
            "timestamp": Utc::now().to_rfc3339(),
        });

        if let Some(obj) = body.as_object_mut() {
            if let Some(suggestion) = terminal.suggestion() {
                obj.insert("suggestion".to_string(), json!(suggestion));
            }
            if let PlannerError::MissingFields { required } = terminal {
                obj.insert("required".to_string(), json!(required));
            }
            if !matches!(
                terminal,
                PlannerError::MissingFields { .. } | PlannerError::InvalidRequest { .. }
            ) {
                obj.insert("provider".to_string(), json!("GROQ"));
            }
        }

        (status, Json(body)).into_response()
    }
}
