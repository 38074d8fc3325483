use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::messages::{Locale, MessageCatalog, MessageKey};
use super::result::{ValidationErrors, ValidationResult};
use crate::models::time::optional_instant;

/// Partially-populated schedule entry submitted for validation.
///
/// Every field may be absent. Time fields accept RFC 3339 text or epoch
/// milliseconds when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCandidate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_instant::deserialize")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "optional_instant::deserialize")]
    pub end_time: Option<DateTime<Utc>>,
}

impl ScheduleCandidate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }
}

/// Validate a schedule candidate using the default locale.
pub fn validate_schedule(candidate: &ScheduleCandidate) -> ValidationResult {
    validate_schedule_with(candidate, &Locale::default())
}

/// Validate a schedule candidate, rendering messages through `catalog`.
///
/// All checks run; errors come out in the order title, start time, end time,
/// interval ordering.
pub fn validate_schedule_with(
    candidate: &ScheduleCandidate,
    catalog: &dyn MessageCatalog,
) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    errors.check(
        candidate.title.as_deref().map_or(true, str::is_empty),
        MessageKey::TitleEmpty,
    );
    errors.check(candidate.start_time.is_none(), MessageKey::StartTimeEmpty);
    errors.check(candidate.end_time.is_none(), MessageKey::EndTimeEmpty);

    if let (Some(start), Some(end)) = (candidate.start_time, candidate.end_time) {
        errors.check(end <= start, MessageKey::EndNotAfterStart);
    }

    errors.finish(catalog)
}
