//! HTTP endpoint handlers

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use study_planner_core::llm::RECOMMENDED_MODEL;
use study_planner_core::planner;
use tracing::info;

use super::{catalog, response::ApiError, AppState};

/// `GET /` - service descriptor
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Multi-Course Study Planner API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "features": catalog::FEATURES,
        "endpoints": {
            "generatePlan": "POST /generate-plan",
            "health": "GET /health",
            "testAI": "POST /test-ai",
            "testPlan": "GET /test-plan",
            "models": "GET /models",
            "goals": "GET /goals",
            "backgrounds": "GET /backgrounds",
            "timeOptions": "GET /time-options",
            "difficulties": "GET /difficulties"
        },
        "documentation": {
            "note": "Use the /generate-plan endpoint to create study plans with multiple courses",
            "priorityFeature": "Courses with weight > 70 get 15% extra revision time",
            "intensityLevels": "easy, medium, hard - affects session density and breaks"
        }
    }))
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Multi-Course Study Planner API is running",
        "timestamp": Utc::now().to_rfc3339(),
        "features": catalog::FEATURES,
        "status": {
            "groqApi": if state.api_key_configured { "Configured" } else { "Missing" },
            "cors": "Enabled",
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// `POST /generate-plan` - the main request path
pub async fn generate_plan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let request = planner::parse_request(body)?;
    info!(
        goal = %request.goal,
        courses = request.courses.len(),
        days = request.days,
        daily_hours = request.daily_hours,
        intensity = %request.difficulty,
        "generating multi-course study plan"
    );

    let plan = planner::generate_plan(
        state.backend.as_ref(),
        &state.models,
        &request,
        Utc::now().date_naive(),
    )
    .await?;

    Ok(Json(plan))
}

/// `GET /goals`
pub async fn goals() -> Json<Value> {
    Json(catalog::goals())
}

/// `GET /backgrounds`
pub async fn backgrounds() -> Json<Value> {
    Json(catalog::backgrounds())
}

/// `GET /time-options`
pub async fn time_options() -> Json<Value> {
    Json(catalog::time_options())
}

/// `GET /difficulties`
pub async fn difficulties() -> Json<Value> {
    Json(catalog::difficulties())
}

/// `GET /models` - candidate list and recommended default
pub async fn models(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "success": true,
        "models": state.models,
        "recommended": RECOMMENDED_MODEL,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// `POST /test-ai` - connectivity probe against the first two candidates
pub async fn test_ai(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    info!("testing GROQ API connectivity");
    let report = planner::test_connectivity(state.backend.as_ref(), &state.models).await?;

    Ok(Json(json!({
        "success": true,
        "message": "GROQ API is working correctly",
        "model": report.model,
        "response": report.response,
        "timestamp": Utc::now().to_rfc3339(),
        "availableModels": state.models,
    })))
}

/// `GET /test-plan` - full generation path on a built-in sample request
pub async fn test_plan(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let request = planner::sample_request();
    info!(goal = %request.goal, "running smoke-test plan generation");

    let plan = planner::generate_plan(
        state.backend.as_ref(),
        &state.models,
        &request,
        Utc::now().date_naive(),
    )
    .await?;

    Ok(Json(plan))
}

/// Fallback for unmatched routes
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Endpoint not found",
            "message": format!("The requested endpoint {method} {} does not exist", uri.path()),
            "timestamp": Utc::now().to_rfc3339(),
            "availableEndpoints": {
                "GET": ["/", "/health", "/goals", "/backgrounds", "/time-options", "/difficulties", "/models", "/test-plan"],
                "POST": ["/generate-plan", "/test-ai"]
            }
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use study_planner_core::error::Result as CoreResult;
    use study_planner_core::llm::{ChatMessage, CompletionBackend};
    use study_planner_core::PlannerError;

    /// Backend that always answers with the same canned reply
    struct CannedBackend {
        reply: String,
    }

    #[async_trait]
    impl CompletionBackend for CannedBackend {
        async fn complete(&self, _model: &str, _messages: &[ChatMessage]) -> CoreResult<String> {
            Ok(self.reply.clone())
        }
    }

    fn state_with(reply: &str) -> Arc<AppState> {
        Arc::new(AppState {
            backend: Arc::new(CannedBackend {
                reply: reply.to_string(),
            }),
            models: vec!["model-a".to_string(), "model-b".to_string()],
            api_key_configured: true,
        })
    }

    #[tokio::test]
    async fn test_generate_plan_happy_path() {
        let state = state_with(r#"{"goal": "pass", "dailySchedule": []}"#);
        let body = json!({
            "goal": "pass",
            "courses": [{"name": "Maths", "weight": 80}, {"name": "Physics"}],
            "days": 5,
            "dailyHours": 2.5
        });

        let Json(plan) = generate_plan(State(state), Json(body)).await.unwrap();
        assert_eq!(plan["success"], true);
        assert_eq!(plan["metadata"]["model"], "model-a");
    }

    #[tokio::test]
    async fn test_generate_plan_rejects_before_backend() {
        let state = state_with("unreachable");
        let body = json!({
            "goal": "pass",
            "courses": [{"name": "Maths"}],
            "days": 15,
            "dailyHours": 2.0
        });

        let err = generate_plan(State(state), Json(body)).await.unwrap_err();
        assert_eq!(err.0.to_string(), "Duration must be between 1-14 days");
    }

    #[tokio::test]
    async fn test_test_ai_reports_model() {
        let state = state_with(r#"{"status": "OK", "message": "API is working"}"#);
        let Json(body) = test_ai(State(state)).await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["model"], "model-a");
        assert_eq!(body["response"]["status"], "OK");
    }

    #[tokio::test]
    async fn test_test_ai_total_failure() {
        let state = state_with("no json here");
        let err = test_ai(State(state)).await.unwrap_err();
        assert!(matches!(err.0, PlannerError::AllModelsFailed { .. }));
    }

    #[tokio::test]
    async fn test_models_endpoint() {
        let state = state_with("unused");
        let Json(body) = models(State(state)).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["models"].as_array().unwrap().len(), 2);
        assert_eq!(body["recommended"], RECOMMENDED_MODEL);
    }

    #[tokio::test]
    async fn test_not_found_lists_endpoints() {
        let (status, Json(body)) =
            not_found(Method::GET, "/nope".parse().unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("GET /nope"));
    }
}
