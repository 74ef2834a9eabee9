//! Integration tests for the cancellable executor.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use svckit::client::{HttpExecutor, TransportError};
use svckit::ExecuteError;
use tokio_util::sync::CancellationToken;

mod common;

fn get_request(addr: SocketAddr) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("http://{}/", addr))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn handler_sees_response_and_execute_returns_its_result() {
    let backend_addr: SocketAddr = "127.0.0.1:28381".parse().unwrap();
    common::start_mock_backend(backend_addr, "Hi there\n").await;

    // Zero timeout and no connector exercise both construction defaults.
    let executor = HttpExecutor::new(None, Duration::ZERO);
    let token = CancellationToken::new();

    let calls = Arc::new(AtomicU32::new(0));
    let handler_calls = calls.clone();

    let result = executor
        .execute(&token, get_request(backend_addr), move |outcome| async move {
            let response = outcome?;
            assert_eq!(response.status(), 200);

            let bytes = axum::body::to_bytes(Body::new(response.into_body()), 1024 * 1024).await?;
            let text = String::from_utf8(bytes.to_vec())?;
            assert_eq!(text.trim(), "Hi there");

            handler_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await;

    assert!(result.is_ok(), "execute should return the handler's Ok: {:?}", result);
    assert_eq!(calls.load(Ordering::SeqCst), 1, "handler runs exactly once");
}

#[tokio::test]
async fn cancelled_token_yields_error_naming_the_url() {
    let backend_addr: SocketAddr = "127.0.0.1:28382".parse().unwrap();
    common::start_stalled_backend(backend_addr).await;

    let executor = HttpExecutor::new(None, Duration::from_secs(30));
    let token = CancellationToken::new();
    token.cancel();

    let calls = Arc::new(AtomicU32::new(0));
    let handler_calls = calls.clone();

    let result = executor
        .execute(&token, get_request(backend_addr), move |outcome| async move {
            assert!(
                matches!(outcome, Err(TransportError::Aborted)),
                "handler should observe the abort, got: {:?}",
                outcome.map(|r| r.status())
            );
            handler_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await;

    let err = result.expect_err("cancellation must surface as an error");
    assert!(
        err.to_string().contains(&backend_addr.to_string()),
        "error should name the target URL: {}",
        err
    );
    // The handler has already run by the time execute returns.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn background_task_finishes_before_execute_returns() {
    let backend_addr: SocketAddr = "127.0.0.1:28383".parse().unwrap();
    common::start_stalled_backend(backend_addr).await;

    let executor = HttpExecutor::new(None, Duration::from_secs(30));
    let token = CancellationToken::new();

    let canceller = {
        let token = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            token.cancel();
        })
    };

    let finished = Arc::new(AtomicU32::new(0));
    let handler_finished = finished.clone();

    let result = executor
        .execute(&token, get_request(backend_addr), move |_outcome| async move {
            // Incremented as the handler's final act; observed after return.
            handler_finished.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await;

    assert!(matches!(result, Err(ExecuteError::Cancelled { .. })));
    assert_eq!(
        finished.load(Ordering::SeqCst),
        1,
        "no background work may outlive execute"
    );
    canceller.await.unwrap();
}

#[tokio::test]
async fn transport_error_goes_to_handler_not_executor() {
    // Nothing listens here; the connect fails.
    let backend_addr: SocketAddr = "127.0.0.1:28384".parse().unwrap();

    let executor = HttpExecutor::new(None, Duration::from_secs(2));
    let token = CancellationToken::new();

    let result = executor
        .execute(&token, get_request(backend_addr), |outcome| async move {
            match outcome {
                Err(TransportError::Call(e)) => Err(format!("upstream unreachable: {}", e).into()),
                other => panic!("expected a connect failure, got: {:?}", other.map(|r| r.status())),
            }
        })
        .await;

    let err = result.expect_err("handler error must pass through unchanged");
    assert!(matches!(err, ExecuteError::Handler(_)));
    assert!(err.to_string().contains("upstream unreachable"));
}

#[tokio::test]
async fn handler_error_is_returned_verbatim_on_success_path() {
    let backend_addr: SocketAddr = "127.0.0.1:28385".parse().unwrap();
    common::start_mock_backend(backend_addr, "ok").await;

    let executor = HttpExecutor::new(None, Duration::ZERO);
    let token = CancellationToken::new();

    let result = executor
        .execute(&token, get_request(backend_addr), |outcome| async move {
            let _ = outcome?;
            Err("payload rejected".into())
        })
        .await;

    let err = result.expect_err("the handler rejected the payload");
    assert!(matches!(err, ExecuteError::Handler(_)));
    assert_eq!(err.to_string(), "payload rejected");
}
