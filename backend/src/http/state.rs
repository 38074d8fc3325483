//! Application state for the HTTP server.

use axum::http::HeaderValue;

use crate::config::{ConfigError, ServerConfig, CORS_ORIGIN_ENV};
use crate::validation::Locale;

/// Shared application state passed to all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Locale used to render validation messages
    pub locale: Locale,
    /// The single browser origin allowed by CORS
    pub allowed_origin: HeaderValue,
}

impl AppState {
    /// Create a new application state.
    pub fn new(locale: Locale, allowed_origin: HeaderValue) -> Self {
        Self {
            locale,
            allowed_origin,
        }
    }

    /// Build the state from resolved configuration.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        let allowed_origin =
            HeaderValue::from_str(&config.cors_origin).map_err(|e| ConfigError::InvalidValue {
                key: CORS_ORIGIN_ENV.to_string(),
                message: format!("'{}' is not a valid origin: {}", config.cors_origin, e),
            })?;

        Ok(Self::new(config.locale, allowed_origin))
    }
}
