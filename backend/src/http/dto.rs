//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

pub use crate::api::{ApiErrorBody, ApiResponse};
pub use crate::validation::{ScheduleCandidate, ValidationResult};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// ISO-8601 server time
    pub timestamp: String,
}

/// Request body for email validation. A missing `email` counts as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailValidationRequest {
    #[serde(default)]
    pub email: Option<String>,
}
