use std::sync::LazyLock;

use regex::Regex;

use super::messages::{Locale, MessageCatalog, MessageKey};
use super::result::{ValidationErrors, ValidationResult};

/// One or more characters that are neither `@` nor ECMAScript whitespace.
///
/// Spelled out instead of `\s`, whose Unicode set differs (U+0085 in, U+FEFF out).
const PART: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+";

/// `local@domain.tld` with no whitespace or extra `@` in any part.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{PART}@{PART}\.{PART}$")).unwrap());

/// Validate an email address using the default locale.
pub fn validate_email(email: &str) -> ValidationResult {
    validate_email_with(email, &Locale::default())
}

/// Validate an email address, rendering messages through `catalog`.
///
/// At most one error is reported: the format rule only runs on non-empty input.
pub fn validate_email_with(email: &str, catalog: &dyn MessageCatalog) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    if email.is_empty() {
        errors.push(MessageKey::EmailEmpty);
    } else if !EMAIL_REGEX.is_match(email) {
        errors.push(MessageKey::EmailInvalid);
    }

    errors.finish(catalog)
}
