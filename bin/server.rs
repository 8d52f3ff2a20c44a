// Receipt Points - Web Server
// REST API with Axum over an in-memory receipt store

use anyhow::{Context, Result};
use clap::Parser;
use receipt_points::api::{router, AppState};
use receipt_points::{logging, ReceiptStore, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    logging::init(config.log_format)?;

    // Create shared state
    let state = AppState::new(Arc::new(ReceiptStore::new()));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;
    let local_addr = listener.local_addr().context("Failed to read bound address")?;

    tracing::info!(bind = %local_addr, version = receipt_points::VERSION, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
