//! # Tienda API Server
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Startup Sequence                               │
//! │                                                                         │
//! │  .env ──► ApiConfig::load ──► Database::connect (lazy pool)             │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                          startup probe (log only)                       │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │              axum::serve ──► ctrl-c / SIGTERM ──► pool close            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An unreachable database does not stop the server: every database route
//! answers `503` until the probe succeeds again.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tienda_api::{router, ApiConfig, AppState};
use tienda_db::Database;

/// Filter used when `RUST_LOG` is unset. `tienda` covers every workspace crate.
const DEFAULT_LOG_FILTER: &str = "info,tienda=debug,tower_http=debug,sqlx=warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env file: {e}");
        }
    }

    init_tracing();

    info!("Starting Tienda API server...");

    let config = ApiConfig::load().context("Invalid configuration")?;
    info!(
        port = config.port,
        database = %config.database.target.redacted(),
        error_detail = ?config.error_detail,
        "Configuration loaded"
    );

    let db = Database::connect(config.database.clone())
        .await
        .context("Invalid database configuration")?;

    match db.ping().await {
        Ok(()) => info!("Database connection established"),
        Err(e) => warn!(error = %e, "Database unreachable at startup; serving 503 until it recovers"),
    }

    let state = AppState::new(Arc::new(db.clone()), config.error_detail);
    let app = router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.close().await;

    if let Err(e) = served {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Resolves on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
