//! HTTP server for interactive audits.
//!
//! Provides three endpoints:
//! - `/` - HTML page with the URL form and, when `?url=` is given, the rendered report
//! - `/api/report` - the same report as JSON
//! - `/healthz` - liveness probe
//!
//! Each request runs its own analysis; nothing is shared between requests
//! except the HTTP client.

mod handlers;
mod types;

use anyhow::Context;
use axum::routing::get;
use axum::Router;

use crate::config::Config;
use handlers::{health_handler, index_handler, report_handler};
pub use types::{AppState, AuditQuery, ErrorResponse};

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/report", get(report_handler))
        .route("/healthz", get(health_handler))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn start_server(config: &Config, state: AppState) -> anyhow::Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind audit server to {address}"))?;

    log::info!("Server is running on http://{}/", address);
    log::info!("  - Report page: http://{}/?url=<page>", address);
    log::info!("  - JSON report: http://{}/api/report?url=<page>", address);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Audit server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_server_reports_bind_failure() {
        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let port = occupied.local_addr().expect("local addr").port();

        let config = Config {
            port,
            ..Default::default()
        };
        let state = AppState::new(std::sync::Arc::new(reqwest::Client::new()));
        let err = start_server(&config, state)
            .await
            .expect_err("port is already taken");
        assert!(err.to_string().contains("Failed to bind audit server"));
    }
}
