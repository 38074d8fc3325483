use serde::{Deserialize, Serialize};

use super::messages::{MessageCatalog, MessageKey};

/// Outcome of a validator: pass/fail plus rendered messages.
///
/// `errors` is `None` exactly when `valid` is true; it is never an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ValidationResult {
    /// A passing result.
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: None,
        }
    }

    /// Build a result from rendered messages; an empty list passes.
    pub fn from_messages(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            Self::ok()
        } else {
            Self {
                valid: false,
                errors: Some(messages),
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Rendered messages, empty when valid.
    pub fn errors(&self) -> &[String] {
        self.errors.as_deref().unwrap_or(&[])
    }
}

/// Ordered accumulator for failed checks.
///
/// Every check may push; nothing short-circuits, so the output order is the
/// order in which checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    keys: Vec<MessageKey>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: MessageKey) {
        self.keys.push(key);
    }

    /// Push `key` when `failed` holds.
    pub fn check(&mut self, failed: bool, key: MessageKey) {
        if failed {
            self.push(key);
        }
    }

    pub fn keys(&self) -> &[MessageKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Render the accumulated keys through `catalog`.
    pub fn finish(self, catalog: &dyn MessageCatalog) -> ValidationResult {
        if !self.keys.is_empty() {
            log::debug!("validation failed with {} error(s): {:?}", self.keys.len(), self.keys);
        }
        ValidationResult::from_messages(
            self.keys
                .into_iter()
                .map(|key| catalog.message(key).to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::messages::Locale;

    #[test]
    fn test_empty_collector_is_valid() {
        let result = ValidationErrors::new().finish(&Locale::En);
        assert_eq!(result, ValidationResult::ok());
        assert!(result.errors.is_none());
    }

    #[test]
    fn test_collector_preserves_push_order() {
        let mut errors = ValidationErrors::new();
        errors.push(MessageKey::EndTimeEmpty);
        errors.check(false, MessageKey::StartTimeEmpty);
        errors.check(true, MessageKey::TitleEmpty);

        let result = errors.finish(&Locale::En);
        assert!(!result.valid);
        assert_eq!(
            result.errors(),
            ["end time must not be empty", "title must not be empty"]
        );
    }

    #[test]
    fn test_from_messages_never_keeps_empty_list() {
        let result = ValidationResult::from_messages(vec![]);
        assert!(result.valid);
        assert_eq!(result.errors, None);
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_valid_result_serializes_without_errors() {
        let json = serde_json::to_value(ValidationResult::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true }));
    }

    #[test]
    fn test_invalid_result_serializes_errors() {
        let result = ValidationResult::from_messages(vec!["x".to_string()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": false, "errors": ["x"] }));
    }
}
