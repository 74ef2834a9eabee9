//! Serve loop for the stock endpoints.

use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::http::handlers::{router, AppState};

/// Serve the stock endpoints on `listener` until the shutdown broadcast
/// fires, then drain in-flight requests and return.
pub async fn run(
    listener: TcpListener,
    state: AppState,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    let app = router(state);

    let addr = listener.local_addr()?;
    // Log after successful bind - the server is actually listening.
    tracing::info!(address = %addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
