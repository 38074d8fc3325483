//! # Orbit Backend
//!
//! Server-side scaffold for the Orbit scheduling application.
//!
//! ## Architecture
//!
//! - [`models`]: Time helpers (display formatting, minute durations, `delay`)
//! - [`validation`]: Email and schedule validators with localized messages
//! - [`api`]: Shared data shapes (`User`, `Schedule`, `ApiResponse`)
//! - [`config`]: Server settings from defaults, TOML and environment
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`logging`]: `RUST_LOG`-driven tracing subscriber for the server
//!

pub mod api;
pub mod config;
pub mod models;
pub mod validation;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(feature = "http-server")]
pub mod logging;
