//! Orbit HTTP Server Binary
//!
//! Loads configuration, builds the router and serves it until Ctrl+C.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin orbit-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 9876)
//! - `CORS_ORIGIN`: Allowed front-end origin (default: http://localhost:7777)
//! - `ORBIT_LOCALE`: Validation message locale (default: zh-TW)
//! - `ORBIT_CONFIG`: Optional TOML config file
//! - `RUST_LOG`: Log filter directives (default: info)

use tracing::{error, info};

use orbit_backend::config::ServerConfig;
use orbit_backend::http::{create_router, AppState};
use orbit_backend::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    if let Err(e) = run().await {
        error!("Server failed to start: {:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run() -> anyhow::Result<()> {
    info!("Starting Orbit HTTP Server");

    let config = ServerConfig::load()?;
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!(
        "CORS origin: {}, message locale: {}",
        config.cors_origin, config.locale
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
