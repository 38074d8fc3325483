//! Shared data shapes for the HTTP API.
//!
//! All types serialize with camelCase field names so the JSON matches what the
//! web client sends and expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::time::{calculate_duration, iso_timestamp};
use crate::validation::ScheduleCandidate;

/// User identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

/// Schedule entry identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleId(pub String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        UserId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ScheduleId {
    pub fn new(value: impl Into<String>) -> Self {
        ScheduleId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Application user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Schedule entry owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: ScheduleId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// Whole minutes between start and end (negative if the entry is reversed).
    pub fn duration_minutes(&self) -> i64 {
        calculate_duration(&self.start_time, &self.end_time)
    }
}

impl From<&Schedule> for ScheduleCandidate {
    fn from(schedule: &Schedule) -> Self {
        ScheduleCandidate {
            title: Some(schedule.title.clone()),
            description: schedule.description.clone(),
            start_time: Some(schedule.start_time),
            end_time: Some(schedule.end_time),
        }
    }
}

/// Error payload carried by a failed [`ApiResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Envelope for every API response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
    /// ISO-8601 time at which the response was produced
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: iso_timestamp(&Utc::now()),
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorBody {
                code: code.into(),
                message: message.into(),
            }),
            timestamp: iso_timestamp(&Utc::now()),
        }
    }
}
