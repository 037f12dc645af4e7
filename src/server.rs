//! HTTP server initialization and runtime setup.
//!
//! Connects the mapping store, wires the services, and runs the Axum server
//! until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::UrlStore;
use crate::infrastructure::store::RedisUrlStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis mapping store (with bounded retries)
/// - Shortener service and router
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Redis stays unreachable after all connection attempts
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    let state = AppState::from_config(&config, store);
    let app = app_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

/// Connects to Redis, retrying with jittered exponential backoff.
///
/// `config.connect_retries` is the total number of attempts (at least one).
async fn connect_store(config: &Config) -> Result<Arc<dyn UrlStore>> {
    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.connect_retries.saturating_sub(1));

    let redis_url = config.redis_url.as_str();
    let ttl = config.ttl();
    let op_timeout = config.backend_timeout();

    let store = Retry::spawn(strategy, || async move {
        RedisUrlStore::connect(redis_url, ttl, op_timeout)
            .await
            .inspect_err(|e| warn!("Redis connection attempt failed: {}", e))
    })
    .await
    .context("Failed to connect to Redis")?;

    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
