//! Application entry point and server initialization
//!
//! This module contains the main function that:
//! - Loads environment configuration
//! - Creates the in-memory URL store
//! - Starts the HTTP server with graceful shutdown support

use std::process::ExitCode;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use url_shortener::config::Config;
use url_shortener::route::create_app;
use url_shortener::store::{AppState, UrlStore};

/// Application entry point
///
/// # Environment Variables
///
/// - `HOST` - Interface to bind (default: 0.0.0.0)
/// - `PORT` - Server port number (default: 8080)
/// - `RUST_LOG` - Log filter (default: url_shortener=debug,tower_http=debug)
#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file if it exists
    dotenv().ok();

    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    if let Some(raw) = Config::port_fallback() {
        tracing::warn!(port = %raw, fallback = config.port, "invalid PORT, using default");
    }

    // Records live only as long as this process
    let state = AppState::new(UrlStore::new());

    let app = create_app(state).layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, %err, "failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("🚀 Server running at http://{}", addr);

    // The server will continue running until it receives SIGTERM or SIGINT
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%err, "server exited with error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Handles graceful shutdown signals
///
/// Returns once either SIGINT (Ctrl+C) or, on Unix, SIGTERM is received.
/// In-flight requests are allowed to complete before the server stops.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    // On non-Unix systems (Windows), only handle Ctrl+C
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received, stopping server.");
}
