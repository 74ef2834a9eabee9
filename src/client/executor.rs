//! The cancellable request executor.
//!
//! Runs a single HTTP call on a background task and races it against a
//! caller-owned [`CancellationToken`]. The caller's response handler always
//! runs: on the happy path it receives the response, on cancellation it
//! receives the abort error. `execute` only returns once the handler has
//! finished.

use std::future::Future;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Uri};
use hyper::body::Incoming;
use hyper::Response;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::time;
use tokio_util::sync::CancellationToken;

/// Boxed error returned by response handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Client-side deadline applied when the executor is built with a zero timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// What the transport produced, as seen by the response handler.
///
/// These never become `execute`'s own error: the handler decides whether to
/// translate, suppress, or propagate them.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying client call failed (connection refused, protocol
    /// error, malformed response).
    #[error("client call failed: {0}")]
    Call(#[from] hyper_util::client::legacy::Error),

    /// The executor's configured deadline elapsed before a response arrived.
    #[error("no response within {0:?}")]
    DeadlineExceeded(Duration),

    /// The in-flight call was torn down because the caller's token fired.
    #[error("request aborted by cancellation")]
    Aborted,
}

/// Errors returned by [`HttpExecutor::execute`].
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The cancellation token completed before the request did. Carries the
    /// target URL for diagnostics.
    #[error("operation cancelled: {url}")]
    Cancelled { url: Uri },

    /// Whatever the response handler returned, passed through unchanged.
    #[error("{0}")]
    Handler(BoxError),

    /// The background task went away without delivering a handler result.
    /// Only reachable if the handler itself panicked.
    #[error("request task dropped its completion signal")]
    WorkerLost,
}

/// Executor for cancellable HTTP calls.
///
/// The inner client (and its connection pool) is shared by every `execute`
/// call made through one instance and is safe for concurrent in-flight
/// requests; the executor itself holds no other mutable state.
pub struct HttpExecutor {
    client: Client<HttpConnector, Body>,
    timeout: Duration,
}

impl HttpExecutor {
    /// Build an executor over `connector`, or a plain HTTP connector when
    /// `None`. A zero `timeout` selects [`DEFAULT_TIMEOUT`]; the timeout
    /// bounds each underlying call independently of any per-call token.
    pub fn new(connector: Option<HttpConnector>, timeout: Duration) -> Self {
        let connector = connector.unwrap_or_else(HttpConnector::new);
        let timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        let client = Client::builder(TokioExecutor::new()).build(connector);
        Self { client, timeout }
    }

    /// The effective client-side deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute `request` on a background task, racing it against `token`.
    ///
    /// The handler receives the transport outcome (a response, or a
    /// [`TransportError`]) exactly once, and its result is forwarded
    /// through a one-slot completion channel.
    ///
    /// If the token fires first, the in-flight call is aborted and the
    /// handler runs with [`TransportError::Aborted`]; the completion channel
    /// is still awaited before [`ExecuteError::Cancelled`] is returned, so
    /// no task outlives this call on either path.
    ///
    /// When cancellation and completion become ready in the same poll the
    /// winner is not deterministic; callers must not rely on an ordering
    /// beyond first-ready-wins.
    pub async fn execute<H, Fut>(
        &self,
        token: &CancellationToken,
        request: Request<Body>,
        handler: H,
    ) -> Result<(), ExecuteError>
    where
        H: FnOnce(Result<Response<Incoming>, TransportError>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
    {
        let url = request.uri().clone();
        let deadline = self.timeout;
        let call = self.client.request(request);

        let abort = CancellationToken::new();
        let worker_abort = abort.clone();
        let (done_tx, mut done_rx) = oneshot::channel();

        tokio::spawn(async move {
            let outcome = tokio::select! {
                result = time::timeout(deadline, call) => match result {
                    Ok(Ok(response)) => Ok(response),
                    Ok(Err(e)) => Err(TransportError::Call(e)),
                    Err(_) => Err(TransportError::DeadlineExceeded(deadline)),
                },
                // Dropping the call future tears the connection down; the
                // handler still observes the outcome.
                _ = worker_abort.cancelled() => Err(TransportError::Aborted),
            };
            let _ = done_tx.send(handler(outcome).await);
        });

        tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!(url = %url, "cancellation won the race, aborting in-flight call");
                abort.cancel();
                // The background task terminates by sending on the channel;
                // wait for it even though its result is no longer reported.
                let _ = (&mut done_rx).await;
                Err(ExecuteError::Cancelled { url })
            }
            result = &mut done_rx => match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(ExecuteError::Handler(e)),
                Err(_) => Err(ExecuteError::WorkerLost),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_selects_default() {
        let executor = HttpExecutor::new(None, Duration::ZERO);
        assert_eq!(executor.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn explicit_timeout_is_kept() {
        let executor = HttpExecutor::new(None, Duration::from_secs(7));
        assert_eq!(executor.timeout(), Duration::from_secs(7));
    }

    #[test]
    fn cancelled_error_names_the_url() {
        let err = ExecuteError::Cancelled {
            url: "http://127.0.0.1:9999/ping".parse().unwrap(),
        };
        assert!(err.to_string().contains("http://127.0.0.1:9999/ping"));
    }
}
