//! # stocktrack server
//!
//! HTTP API over the inventory ledger, sale coordinator, history log, and
//! cloud mirror.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        stocktrack server                            │
//! │                                                                     │
//! │  Client ───► axum router ───► handlers ───► ledger / history /      │
//! │                                │            sale coordinator        │
//! │                                │                   │                │
//! │                                ▼                   ▼                │
//! │                          cloud mirror       data/stock.csv          │
//! │                          (push / pull)      data/history.csv        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod bootstrap;
mod config;
mod error;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting stocktrack server...");

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        port = config.port,
        data_dir = %config.data_dir.display(),
        mirror_configured = config.mirror_config().is_configured(),
        "Configuration loaded"
    );

    // Build shared state and make sure the table files exist
    let state = Arc::new(AppState::new(&config));
    bootstrap::prepare_data(&state).await?;

    // Serve
    let app = routes::router(state);
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
