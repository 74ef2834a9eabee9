//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through the tracing crate
//! - Filter configurable via RUST_LOG; a crate-scoped default otherwise
//! - Request-level logging comes from tower-http's TraceLayer on the router

pub mod logging;

pub use logging::init_logging;
