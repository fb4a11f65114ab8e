//! fibweb HTTP Server
//!
//! Serves the first N Fibonacci terms as plain text.
//!
//! # Endpoints
//!
//! - `GET /fib?COUNT=<n>`
//!   - Returns `[0 1 1 ...]` followed by a newline, for $1 \le n \le 93$.
//!   - Returns an `ERROR: ...` line for missing, non-positive or too large input.
//! - Any other path
//!   - Returns `ERROR: Path not recognized. Use /fib.`
//!
//! Status is 200 for every response unless started with `--strict-status`.

use anyhow::Context;
use axum::{routing::any, Router};
use clap::Parser;
use std::sync::Arc;

use crate::config::Args;
use crate::handlers::{get_fib, unknown_path, AppState};
use crate::logging::{init_logging, RequestLogger, TracingLogger};

/// Creates the Axum router with all routes configured.
///
/// Separated from [`run`] so integration tests can drive the router without a
/// live listener.
///
/// # Arguments
/// * `strict_status` - Map failures to 400/404 instead of 200.
/// * `logger` - Receives one event per handled request.
pub fn create_app(strict_status: bool, logger: Arc<dyn RequestLogger>) -> Router {
    let state = AppState {
        logger,
        strict_status,
    };

    Router::new()
        .route("/fib", any(get_fib))
        .fallback(unknown_path)
        .with_state(state)
}

/// Main server entry point.
///
/// Parses CLI arguments, installs logging, and serves until Ctrl+C or SIGTERM.
pub async fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_format);

    let addr = args.socket_addr();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        strict_status = args.strict_status,
        "Starting web server"
    );

    let app = create_app(args.strict_status, Arc::new(TracingLogger));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
