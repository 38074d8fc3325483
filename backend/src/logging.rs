//! Logging setup for the server binary.
//!
//! `RUST_LOG` takes full `tracing_subscriber::EnvFilter` directives
//! (e.g. `orbit_backend=debug,tower_http=info`); unset, empty or malformed
//! values fall back to `info`.

use std::env;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "info";

/// Build the filter for the given `RUST_LOG` value.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global fmt subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let directives = env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();
}
