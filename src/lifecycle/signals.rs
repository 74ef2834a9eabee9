//! OS signal handling.
//!
//! Translates the process termination signals into a single awaitable
//! event. Registered once, by the lifecycle coordinator.

use tracing::{error, info};

/// Wait for a termination signal: SIGINT, SIGHUP, SIGTERM, or SIGUSR1.
///
/// Returns the name of the signal that arrived.
///
/// # Panics
/// Panics if signal handlers cannot be registered (OS resource exhaustion).
#[cfg(unix)]
pub async fn wait_for_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut register = |kind: SignalKind, name: &'static str| match signal(kind) {
        Ok(stream) => stream,
        Err(e) => {
            error!(signal = name, error = %e, "Failed to register signal handler");
            panic!("Cannot register {} handler: {}", name, e);
        }
    };

    let mut sigint = register(SignalKind::interrupt(), "SIGINT");
    let mut sighup = register(SignalKind::hangup(), "SIGHUP");
    let mut sigterm = register(SignalKind::terminate(), "SIGTERM");
    let mut sigusr1 = register(SignalKind::user_defined1(), "SIGUSR1");

    tokio::select! {
        _ = sigint.recv() => {
            info!("Received SIGINT");
            "SIGINT"
        }
        _ = sighup.recv() => {
            info!("Received SIGHUP");
            "SIGHUP"
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM");
            "SIGTERM"
        }
        _ = sigusr1.recv() => {
            info!("Received SIGUSR1");
            "SIGUSR1"
        }
    }
}

/// Wait for Ctrl+C (non-unix).
///
/// # Panics
/// Panics if the Ctrl+C handler cannot be registered.
#[cfg(not(unix))]
pub async fn wait_for_signal() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to wait for Ctrl+C");
        panic!("Cannot wait for Ctrl+C: {}", e);
    }
    info!("Received Ctrl+C");
    "CTRL_C"
}
