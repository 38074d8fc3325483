//! HTTP handlers for the REST API.
//!
//! Handlers only translate between JSON and the validation/time modules;
//! validation failures are a normal `200` response carrying the result.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;

use super::dto::{EmailValidationRequest, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::ApiResponse;
use crate::models::time::iso_timestamp;
use crate::validation::{self, ScheduleCandidate, ValidationResult};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: iso_timestamp(&Utc::now()),
    })
}

// =============================================================================
// Validation
// =============================================================================

/// POST /v1/validate/email
pub async fn validate_email(
    State(state): State<AppState>,
    payload: Result<Json<EmailValidationRequest>, JsonRejection>,
) -> HandlerResult<ApiResponse<ValidationResult>> {
    let Json(request) = payload?;
    let email = request.email.unwrap_or_default();

    let result = validation::validate_email_with(&email, &state.locale);
    tracing::debug!(valid = result.valid, "validated email");

    Ok(Json(ApiResponse::ok(result)))
}

/// POST /v1/validate/schedule
pub async fn validate_schedule(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleCandidate>, JsonRejection>,
) -> HandlerResult<ApiResponse<ValidationResult>> {
    let Json(candidate) = payload?;

    let result = validation::validate_schedule_with(&candidate, &state.locale);
    tracing::debug!(
        valid = result.valid,
        errors = result.errors().len(),
        "validated schedule"
    );

    Ok(Json(ApiResponse::ok(result)))
}
