//! Temporal helpers shared by the validators and the HTTP layer.
//!
//! A point-in-time is always carried as `DateTime<Utc>`; conversion to a
//! display zone happens only when rendering.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

/// Display format used by [`format_date`]: `YYYY-MM-DD HH:mm`, 24-hour clock.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Format an instant as `YYYY-MM-DD HH:mm` in the process's local time zone.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use orbit_backend::models::format_date;
///
/// let rendered = format_date(&Utc.with_ymd_and_hms(2025, 9, 16, 7, 30, 0).unwrap());
/// assert_eq!(rendered.len(), "2025-09-16 15:30".len());
/// ```
pub fn format_date(instant: &DateTime<Utc>) -> String {
    format_date_in(instant, &Local)
}

/// Format an instant as `YYYY-MM-DD HH:mm` in an explicit time zone.
pub fn format_date_in<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

/// Whole minutes elapsed from `start` to `end`, rounded toward negative infinity.
///
/// No ordering is enforced: an `end` before `start` yields a negative count,
/// and anything short of a full minute backwards is already `-1`.
pub fn calculate_duration(start: &DateTime<Utc>, end: &DateTime<Utc>) -> i64 {
    let elapsed_ms = end.timestamp_millis() - start.timestamp_millis();
    elapsed_ms.div_euclid(MILLIS_PER_MINUTE)
}

/// Suspend the current task for at least `ms` milliseconds.
///
/// Other tasks on the runtime keep running in the meantime. Dropping the
/// returned future abandons the wait.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Milliseconds since the Unix epoch.
pub fn to_epoch_millis(instant: &DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}

/// Build an instant from milliseconds since the Unix epoch.
///
/// Returns `None` when the value falls outside chrono's representable range.
pub fn from_epoch_millis(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
}

/// RFC 3339 UTC timestamp with millisecond precision, e.g. `2025-09-16T07:30:00.000Z`.
pub fn iso_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Lenient deserializer for optional instants.
///
/// Accepts an RFC 3339 string or an integer count of epoch milliseconds;
/// `null` becomes `None`. Pair with `#[serde(default)]` so a missing field is
/// `None` as well.
pub mod optional_instant {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawInstant {
        Millis(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawInstant>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawInstant::Millis(ms)) => super::from_epoch_millis(ms)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("epoch milliseconds out of range: {}", ms))),
            Some(RawInstant::Text(text)) => DateTime::parse_from_rfc3339(&text)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", text, e))),
        }
    }
}
