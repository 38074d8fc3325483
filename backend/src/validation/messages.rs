//! Message table for validation errors.
//!
//! Which checks fire is decided by the validators and recorded as
//! [`MessageKey`]s; the text shown to users comes from a [`MessageCatalog`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a validation message independently of its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    EmailEmpty,
    EmailInvalid,
    TitleEmpty,
    StartTimeEmpty,
    EndTimeEmpty,
    EndNotAfterStart,
}

impl MessageKey {
    pub const ALL: [MessageKey; 6] = [
        MessageKey::EmailEmpty,
        MessageKey::EmailInvalid,
        MessageKey::TitleEmpty,
        MessageKey::StartTimeEmpty,
        MessageKey::EndTimeEmpty,
        MessageKey::EndNotAfterStart,
    ];
}

/// Source of display text for validation messages.
pub trait MessageCatalog {
    fn message(&self, key: MessageKey) -> &str;
}

/// Built-in locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Traditional Chinese (Taiwan).
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::En => "en",
        }
    }
}

impl MessageCatalog for Locale {
    fn message(&self, key: MessageKey) -> &str {
        match self {
            Locale::ZhTw => match key {
                MessageKey::EmailEmpty => "Email 不能為空",
                MessageKey::EmailInvalid => "Email 格式不正確",
                MessageKey::TitleEmpty => "標題不能為空",
                MessageKey::StartTimeEmpty => "開始時間不能為空",
                MessageKey::EndTimeEmpty => "結束時間不能為空",
                MessageKey::EndNotAfterStart => "結束時間必須晚於開始時間",
            },
            Locale::En => match key {
                MessageKey::EmailEmpty => "email must not be empty",
                MessageKey::EmailInvalid => "email format is invalid",
                MessageKey::TitleEmpty => "title must not be empty",
                MessageKey::StartTimeEmpty => "start time must not be empty",
                MessageKey::EndTimeEmpty => "end time must not be empty",
                MessageKey::EndNotAfterStart => "end time must be after start time",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a locale code is not one of the built-in tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-tw" | "zh" => Ok(Locale::ZhTw),
            "en" | "en-us" => Ok(Locale::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
