//! Plan generation: request validation, allocation, date mapping and the
//! multi-model completion loop
//!
//! The planner is the bridge between validated user input and the
//! external model. It computes the allocation and study dates, renders
//! the prompt, then walks the candidate model list sequentially until
//! one yields a reply containing a structurally valid plan.

pub mod extract;
pub mod prompt;

use crate::allocator::{allocate, AllocatedCourse, Course, Difficulty, PriorityTier};
use crate::dates::{default_preferred_days, study_dates};
use crate::error::{PlannerError, Result};
use crate::llm::{ChatMessage, CompletionBackend};
use chrono::{NaiveDate, Utc};
use extract::{extract_json, Extraction};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

/// Inclusive bounds on the requested plan duration
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 14;

/// Inclusive bounds on the daily hour budget
pub const MIN_DAILY_HOURS: f64 = 0.5;
pub const MAX_DAILY_HOURS: f64 = 8.0;

/// A validated plan request
///
/// Strict boundary type: anything not conforming is rejected before it
/// reaches the allocator or the completion backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub goal: String,
    pub courses: Vec<Course>,
    #[serde(alias = "totalDays")]
    pub days: u32,
    pub daily_hours: f64,
    /// Overall plan intensity; the HTTP body calls this `difficulty`
    #[serde(default, alias = "intensity")]
    pub difficulty: Difficulty,
    #[serde(default = "default_preferred_times")]
    pub preferred_times: String,
    #[serde(default = "default_preferred_days")]
    pub preferred_days: Vec<String>,
}

fn default_preferred_times() -> String {
    "Flexible".to_string()
}

impl PlanRequest {
    /// Enforce the range rules from the request contract
    pub fn validate(&self) -> Result<()> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(PlannerError::invalid("Duration must be between 1-14 days"));
        }
        if !(MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&self.daily_hours) {
            return Err(PlannerError::invalid(
                "Daily hours must be between 0.5-8 hours",
            ));
        }
        if self.courses.is_empty() {
            return Err(PlannerError::invalid("Please provide at least one course"));
        }
        Ok(())
    }
}

/// Parse and validate a raw request body into a [`PlanRequest`]
pub fn parse_request(body: Value) -> Result<PlanRequest> {
    let present = |keys: &[&str]| {
        keys.iter()
            .any(|k| body.get(*k).map(|v| !v.is_null()).unwrap_or(false))
    };

    let mut required = Vec::new();
    if !present(&["goal"]) {
        required.push("goal");
    }
    if !present(&["courses"]) {
        required.push("courses");
    }
    if !present(&["days", "totalDays"]) {
        required.push("days");
    }
    if !present(&["dailyHours"]) {
        required.push("dailyHours");
    }
    if !required.is_empty() {
        return Err(PlannerError::MissingFields { required });
    }

    let request: PlanRequest = serde_json::from_value(body)
        .map_err(|e| PlannerError::invalid(format!("Invalid request body: {e}")))?;
    request.validate()?;
    Ok(request)
}

/// Try one candidate model and demand a structurally valid plan back
async fn try_candidate(
    backend: &dyn CompletionBackend,
    model: &str,
    messages: &[ChatMessage],
) -> Result<Value> {
    let reply = backend.complete(model, messages).await?;

    match extract_json(&reply) {
        Extraction::FoundValid(plan) => {
            if plan.get("goal").is_none() || plan.get("dailySchedule").is_none() {
                Err(PlannerError::InvalidReply {
                    reason: "missing required fields in response".to_string(),
                })
            } else {
                Ok(plan)
            }
        }
        Extraction::FoundInvalid(reason) => Err(PlannerError::InvalidReply {
            reason: format!("failed to parse AI response: {reason}"),
        }),
        Extraction::NotFound => Err(PlannerError::InvalidReply {
            reason: "no JSON found in response".to_string(),
        }),
    }
}

/// Generate a study plan for a validated request.
///
/// Candidates are tried strictly in order with one call in flight at a
/// time; the first model whose reply yields a valid plan wins. Only
/// total exhaustion surfaces an error, carrying the last failure.
pub async fn generate_plan(
    backend: &dyn CompletionBackend,
    models: &[String],
    request: &PlanRequest,
    today: NaiveDate,
) -> Result<Value> {
    let allocation = allocate(&request.courses, request.daily_hours);
    for course in &allocation {
        info!(
            course = %course.name,
            priority = %course.priority,
            percentage = course.percentage,
            daily_hours = course.daily_hours,
            "time allocation"
        );
    }

    let dates = study_dates(request.days, &request.preferred_days, today);
    if dates.len() < request.days as usize {
        warn!(
            requested = request.days,
            found = dates.len(),
            "could not satisfy the requested day count within the scan window"
        );
    }

    let messages = [
        ChatMessage::system(prompt::SYSTEM_PROMPT),
        ChatMessage::user(prompt::build_plan_prompt(request, &allocation, &dates, today)),
    ];

    let mut last_error: Option<PlannerError> = None;
    for model in models {
        info!(model = %model, "trying model");
        match try_candidate(backend, model, &messages).await {
            Ok(mut plan) => {
                info!(model = %model, "plan generated");
                augment_plan(&mut plan, model, request, &allocation, dates.len());
                return Ok(plan);
            }
            Err(e) => {
                info!(model = %model, error = %e, "model failed");
                last_error = Some(e);
            }
        }
    }

    Err(PlannerError::AllModelsFailed {
        last: Box::new(last_error.unwrap_or(PlannerError::Internal {
            message: "no candidate models configured".to_string(),
        })),
    })
}

/// Fold the computed metadata and success flag into the parsed plan
fn augment_plan(
    plan: &mut Value,
    model: &str,
    request: &PlanRequest,
    allocation: &[AllocatedCourse],
    scheduled_days: usize,
) {
    let high_priority = allocation
        .iter()
        .filter(|c| c.priority == PriorityTier::High)
        .count();

    if let Some(obj) = plan.as_object_mut() {
        obj.insert(
            "metadata".to_string(),
            json!({
                "generatedAt": Utc::now().to_rfc3339(),
                "generatedBy": "GROQ AI",
                "model": model,
                "provider": "GROQ",
                "note": "Multi-course study plan with priority-based extra revision",
                "totalCourses": request.courses.len(),
                "highPriorityCourses": high_priority,
                "input": {
                    "preferredDays": request.preferred_days,
                    "preferredTimes": request.preferred_times,
                    "totalDays": scheduled_days,
                    "courseCount": request.courses.len(),
                    "overallIntensity": request.difficulty,
                },
            }),
        );
        obj.insert("success".to_string(), json!(true));
        obj.insert(
            "id".to_string(),
            json!(format!("plan_{}", Utc::now().timestamp_millis())),
        );
    }
}

/// Result of the connectivity probe
#[derive(Debug, Serialize)]
pub struct ConnectivityReport {
    /// The candidate that answered
    pub model: String,
    /// The parsed probe reply
    pub response: Value,
}

/// Exercise the completion path with a trivial fixed prompt against the
/// first two candidates
pub async fn test_connectivity(
    backend: &dyn CompletionBackend,
    models: &[String],
) -> Result<ConnectivityReport> {
    let messages = [
        ChatMessage::system(prompt::SYSTEM_PROMPT),
        ChatMessage::user(prompt::PROBE_PROMPT),
    ];

    let mut last_error: Option<PlannerError> = None;
    for model in models.iter().take(2) {
        match backend.complete(model, &messages).await {
            Ok(reply) => match extract_json(&reply) {
                Extraction::FoundValid(response) => {
                    return Ok(ConnectivityReport {
                        model: model.clone(),
                        response,
                    });
                }
                Extraction::FoundInvalid(reason) => {
                    last_error = Some(PlannerError::InvalidReply { reason });
                }
                Extraction::NotFound => {
                    last_error = Some(PlannerError::InvalidReply {
                        reason: "no JSON found in response".to_string(),
                    });
                }
            },
            Err(e) => last_error = Some(e),
        }
    }

    Err(PlannerError::AllModelsFailed {
        last: Box::new(last_error.unwrap_or(PlannerError::Internal {
            message: "no candidate models configured".to_string(),
        })),
    })
}

/// Built-in sample request used by the smoke-test endpoint
pub fn sample_request() -> PlanRequest {
    serde_json::from_value(json!({
        "goal": "Prepare for Final Exams",
        "courses": [
            {
                "name": "Operating Systems",
                "topics": "Process Management, Memory Management, File Systems, Virtual Memory",
                "weight": 80,
                "difficulty": "hard"
            },
            {
                "name": "Database Systems",
                "topics": "SQL Queries, Normalization, Transactions, Indexing",
                "weight": 60,
                "difficulty": "medium"
            },
            {
                "name": "Data Structures",
                "topics": "Trees, Graphs, Sorting Algorithms, Hash Tables",
                "weight": 40,
                "difficulty": "easy"
            }
        ],
        "days": 7,
        "dailyHours": 3,
        "difficulty": "medium",
        "preferredTimes": "Morning 9-12, Evening 7-10",
        "preferredDays": ["Monday", "Tuesday", "Wednesday", "Thursday"]
    }))
    .unwrap_or_else(|_| unreachable!("sample request is statically valid"))
}
