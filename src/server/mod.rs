//! The HTTP surface: an axum router exposing the probability endpoint, with
//! permissive CORS, served until Ctrl-C.

pub mod config;
mod cors;
pub mod error;
mod routes;

use crate::climatology::fetcher::ClimatologyFetcher;
use crate::estimator::thresholds::Thresholds;
use crate::server::error::ServerError;
use axum::routing::get;
use axum::Router;
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared, read-only request context.
#[derive(Debug, Clone)]
pub struct AppState {
    pub fetcher: ClimatologyFetcher,
    pub thresholds: Thresholds,
}

impl AppState {
    pub fn new(fetcher: ClimatologyFetcher, thresholds: Thresholds) -> Self {
        Self {
            fetcher,
            thresholds,
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/probabilities", get(routes::get_probabilities))
        .route("/health", get(routes::health))
        .layer(cors::cors_layer())
        .with_state(Arc::new(state))
}

/// Binds `addr` and serves [`router`] until the process receives Ctrl-C.
///
/// # Errors
///
/// [`ServerError::Bind`] if the address cannot be bound, [`ServerError::Serve`] if
/// the accept loop fails.
pub async fn run(addr: SocketAddr, state: AppState) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(addr, e))?;
    let local_addr = listener.local_addr().unwrap_or(addr);
    info!("Listening on http://{}", local_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}
