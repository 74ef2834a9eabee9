//! The stock REST endpoints: health, version, and the 404 fallback.

use axum::{
    body::Body,
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::http::envelope::{Envelope, HostInfo, CONTENT_TYPE_JSON};

/// Shared state injected into the handlers.
#[derive(Clone)]
pub struct AppState {
    pub host: HostInfo,
    pub version: String,
}

impl AppState {
    pub fn new(host: HostInfo, version: impl Into<String>) -> Self {
        Self {
            host,
            version: version.into(),
        }
    }
}

/// Build the router for the stock endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/version", get(version))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Health probe: a versioned envelope with request id "ping".
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("PING - in service");
    write_json(
        StatusCode::OK,
        Envelope::ok_with_version("ping", &state.version, &state.host),
    )
}

/// Version report, request id "version".
async fn version(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!(version = %state.version, "version requested");
    write_json(
        StatusCode::OK,
        Envelope::ok_with_version("version", &state.version, &state.host),
    )
}

/// Fallback for unmatched routes: a 404 envelope naming the path.
async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let message = format!("{} not found", uri);
    tracing::warn!(error = %message, "unmatched route");
    write_json(
        StatusCode::NOT_FOUND,
        Envelope::not_found("-", &message, &state.host),
    )
}

/// Encode an envelope as the response body, newline-terminated.
///
/// An encoding failure degrades to an internal-error envelope rather than a
/// bare error body.
fn write_json(status: StatusCode, envelope: Envelope) -> Response {
    match serde_json::to_vec(&envelope) {
        Ok(mut body) => {
            body.push(b'\n');
            (
                status,
                [(CONTENT_TYPE, CONTENT_TYPE_JSON)],
                Body::from(body),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "encoding JSON response failed");
            let host = HostInfo::named(envelope.host);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Envelope::internal_error(&envelope.request_id, e, &host)),
            )
                .into_response()
        }
    }
}
