//! Server configuration.
//!
//! Settings are resolved in three layers: built-in defaults, an optional TOML
//! file named by `ORBIT_CONFIG`, then individual environment variables.
//!
//! # Environment Variables
//!
//! - `ORBIT_CONFIG`: Path to a TOML config file (optional)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 9876)
//! - `CORS_ORIGIN`: Allowed browser origin (default: http://localhost:7777)
//! - `ORBIT_LOCALE`: Validation message locale, `zh-TW` or `en` (default: zh-TW)
//!
//! # File format
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 9000
//! cors_origin = "https://orbit.example.com"
//! locale = "en"
//! ```

use std::env;
use std::fs;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::validation::Locale;

pub const CONFIG_PATH_ENV: &str = "ORBIT_CONFIG";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const CORS_ORIGIN_ENV: &str = "CORS_ORIGIN";
pub const LOCALE_ENV: &str = "ORBIT_LOCALE";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9876;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:7777";

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Invalid listen address {address}: {message}")]
    InvalidAddress { address: String, message: String },
}

/// Contents of a TOML config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSettings,
}

/// `[server]` table; every key is optional and overrides the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub cors_origin: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl ConfigFile {
    /// Load a config file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub locale: Locale,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            locale: Locale::default(),
        }
    }
}

impl ServerConfig {
    /// Resolve configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Resolve configuration using `lookup` in place of the process environment.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            let file = ConfigFile::from_file(&path)?;
            config.apply_settings(file.server)?;
        }

        config.apply_env_with(lookup)?;
        Ok(config)
    }

    /// Overlay the keys present in a `[server]` table.
    pub fn apply_settings(&mut self, settings: ServerSettings) -> Result<(), ConfigError> {
        if let Some(host) = settings.host {
            self.host = host;
        }
        if let Some(port) = settings.port {
            self.port = port;
        }
        if let Some(origin) = settings.cors_origin {
            self.cors_origin = origin;
        }
        if let Some(locale) = settings.locale {
            self.locale = parse_locale("server.locale", &locale)?;
        }
        Ok(())
    }

    fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: PORT_ENV.to_string(),
                message: format!("'{}' is not a valid port: {}", port, e),
            })?;
        }
        if let Some(origin) = lookup(CORS_ORIGIN_ENV) {
            self.cors_origin = origin;
        }
        if let Some(locale) = lookup(LOCALE_ENV) {
            self.locale = parse_locale(LOCALE_ENV, &locale)?;
        }
        Ok(())
    }

    /// Address to bind the listener to.
    ///
    /// IPv4 and IPv6 literals (bracketed or not) are used as-is; anything else
    /// is resolved as a hostname and the first address wins.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.trim_start_matches('[').trim_end_matches(']');
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        let invalid = |message: String| ConfigError::InvalidAddress {
            address: format!("{}:{}", self.host, self.port),
            message,
        };
        (host, self.port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }
}

fn parse_locale(key: &str, value: &str) -> Result<Locale, ConfigError> {
    value.parse().map_err(|e: crate::validation::UnknownLocale| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}
