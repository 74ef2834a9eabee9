//! Startup orchestration.
//!
//! Brings the service up in dependency order: host identity first, then the
//! lifecycle coordinator, listeners last so traffic only arrives once
//! everything behind it exists. Fail fast: any startup error is fatal and
//! returned to the entry point.

use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::envelope::HostInfo;
use crate::http::handlers::AppState;
use crate::lifecycle::drain::DrainCoordinator;

/// Fatal startup failures, surfaced to the entry point.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("hostname resolution failed: {0}")]
    Host(#[source] std::io::Error),

    #[error("cannot bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the stock endpoints and serve until a termination signal has been
/// received and the drain window has passed.
///
/// Installs the process's single signal subscription; call once.
pub async fn serve(config: ServiceConfig) -> Result<(), StartupError> {
    let host = HostInfo::resolve().map_err(StartupError::Host)?;
    let state = AppState::new(host, config.version.clone());

    let coordinator = DrainCoordinator::new(Duration::from_secs(config.drain_secs));
    let _signal_listener = coordinator.spawn();

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.bind_address.clone(),
            source,
        })?;

    crate::http::server::run(listener, state, coordinator.subscribe())
        .await
        .map_err(StartupError::Serve)
}
