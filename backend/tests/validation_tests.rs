//! Validator behavior through the public API.

use chrono::{Duration, TimeZone, Utc};

use orbit_backend::api::{Schedule, ScheduleId, UserId};
use orbit_backend::validation::*;

struct ShoutingCatalog;

impl MessageCatalog for ShoutingCatalog {
    fn message(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::TitleEmpty => "TITLE!",
            MessageKey::StartTimeEmpty => "START!",
            MessageKey::EndTimeEmpty => "END!",
            MessageKey::EndNotAfterStart => "ORDER!",
            MessageKey::EmailEmpty => "EMAIL!",
            MessageKey::EmailInvalid => "FORMAT!",
        }
    }
}

#[test]
fn test_email_empty_has_exactly_one_error() {
    let result = validate_email("");
    assert_eq!(
        result,
        ValidationResult {
            valid: false,
            errors: Some(vec!["Email 不能為空".to_string()]),
        }
    );
}

#[test]
fn test_email_valid_has_no_errors() {
    let result = validate_email("a@b.com");
    assert_eq!(result, ValidationResult { valid: true, errors: None });
}

#[test]
fn test_email_malformed_has_format_error_only() {
    let result = validate_email_with("not-an-email", &Locale::En);
    assert_eq!(result.errors(), ["email format is invalid"]);
}

#[test]
fn test_schedule_empty_has_three_errors() {
    let result = validate_schedule_with(&ScheduleCandidate::default(), &Locale::En);
    assert_eq!(
        result.errors(),
        [
            "title must not be empty",
            "start time must not be empty",
            "end time must not be empty",
        ]
    );
}

#[test]
fn test_schedule_interval_boundaries() {
    let t = Utc.with_ymd_and_hms(2025, 9, 16, 9, 0, 0).unwrap();

    let reversed = ScheduleCandidate::new()
        .with_title("x")
        .with_start_time(t)
        .with_end_time(t - Duration::milliseconds(1));
    assert_eq!(
        validate_schedule_with(&reversed, &Locale::En).errors(),
        ["end time must be after start time"]
    );

    let one_minute = ScheduleCandidate::new()
        .with_title("x")
        .with_start_time(t)
        .with_end_time(t + Duration::milliseconds(60_000));
    assert!(validate_schedule(&one_minute).valid);
}

#[test]
fn test_custom_catalog_changes_text_not_checks() {
    let result = validate_schedule_with(&ScheduleCandidate::default(), &ShoutingCatalog);
    assert_eq!(result.errors(), ["TITLE!", "START!", "END!"]);

    let default_result = validate_schedule(&ScheduleCandidate::default());
    assert_eq!(default_result.errors().len(), result.errors().len());
}

#[test]
fn test_validators_are_idempotent() {
    let candidate = ScheduleCandidate::new().with_title("1:1");
    assert_eq!(validate_schedule(&candidate), validate_schedule(&candidate));
    assert_eq!(validate_email("x@y"), validate_email("x@y"));
}

#[test]
fn test_validity_matches_error_presence() {
    let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let candidates = [
        ScheduleCandidate::default(),
        ScheduleCandidate::new().with_title("a"),
        ScheduleCandidate::new()
            .with_title("a")
            .with_start_time(t)
            .with_end_time(t + Duration::hours(2)),
    ];

    for candidate in &candidates {
        let result = validate_schedule(candidate);
        assert_eq!(result.valid, result.errors.is_none());
        assert_ne!(result.errors.as_ref().map(Vec::len), Some(0));
    }
}

#[test]
fn test_schedule_entity_validates_through_candidate() {
    let t = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
    let schedule = Schedule {
        id: ScheduleId::new("s"),
        user_id: UserId::new("u"),
        title: "Retro".to_string(),
        description: Some("sprint 12".to_string()),
        start_time: t,
        end_time: t,
        is_completed: false,
        created_at: t,
        updated_at: t,
    };

    let result = validate_schedule_with(&ScheduleCandidate::from(&schedule), &Locale::En);
    assert_eq!(result.errors(), ["end time must be after start time"]);
    assert_eq!(schedule.duration_minutes(), 0);
}
