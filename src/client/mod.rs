//! Cancellable outbound HTTP execution.
//!
//! # Data Flow
//! ```text
//! caller
//!     → executor.rs (spawn request on background task)
//!     → handler runs with (response | transport error)
//!     → one-slot completion signal
//!     ← caller unblocks: first of {token cancelled, completion fired}
//! ```
//!
//! # Design Decisions
//! - Exactly one HTTP call per `execute`; retries belong to the caller
//! - The handler runs exactly once on every path, cancellation included
//! - `execute` never returns while its background task is still alive
//! - Tie-breaking when cancellation and completion are ready in the same
//!   poll is non-deterministic (select fairness)

pub mod executor;

pub use executor::{BoxError, ExecuteError, HttpExecutor, TransportError, DEFAULT_TIMEOUT};

/// The caller-owned cancellation handle accepted by
/// [`HttpExecutor::execute`].
pub use tokio_util::sync::CancellationToken;
