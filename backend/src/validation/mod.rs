//! Field-level validators for user and schedule input.
//!
//! Validators never fail: problems are reported as messages inside a
//! [`ValidationResult`]. Checks are recorded as [`MessageKey`]s and rendered
//! through a [`MessageCatalog`], so the set and order of checks stays fixed
//! while the display text can be swapped per locale.

pub mod email;
pub mod messages;
pub mod result;
pub mod schedule;

pub use email::{validate_email, validate_email_with};
pub use messages::{Locale, MessageCatalog, MessageKey, UnknownLocale};
pub use result::{ValidationErrors, ValidationResult};
pub use schedule::{validate_schedule, validate_schedule_with, ScheduleCandidate};
