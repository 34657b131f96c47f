//! Runs the taskboard HTTP and WebSocket server.
//!
//! Usage:
//!
//! ```text
//! JWT_ACCESS_SECRET=... taskboard_server [--bind 0.0.0.0:5000] [--database-url postgres://...]
//! ```
//!
//! Without a database URL the server keeps boards and tasks in memory.

use clap::Parser;
use taskboard::{
    config::ServerConfig,
    http::{AppState, build_router},
    telemetry::init_tracing,
};
use tokio::net::TcpListener;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    init_tracing(config.log_format)?;

    let state = AppState::from_config(&config).await?;
    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "taskboard listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("taskboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
