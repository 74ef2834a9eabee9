//! Utility helpers for tokio/axum HTTP services.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │                   svckit                      │
//!                 │                                               │
//!   outbound call │  ┌────────────────────────────────────────┐  │
//!   ──────────────┼─▶│ client: HttpExecutor                   │  │
//!   + cancel token│  │   background task ⟷ cancellation race  │  │
//!                 │  └────────────────────────────────────────┘  │
//!                 │                                               │
//!   GET /healthz  │  ┌─────────────┐   ┌──────────────────────┐  │
//!   GET /version  │  │ http:       │   │ http: Envelope       │  │
//!   ──────────────┼─▶│ handlers    │──▶│ status / request_id  │  │
//!   (404 fallback)│  │ + serve     │   │ version/data/error   │  │
//!                 │  └─────────────┘   │ host                 │  │
//!                 │                    └──────────────────────┘  │
//!                 │  ┌────────────────────────────────────────┐  │
//!                 │  │ cross-cutting: config (env→flag),      │  │
//!                 │  │ lifecycle (signals, drain, shutdown),  │  │
//!                 │  │ observability (tracing init)           │  │
//!                 │  └────────────────────────────────────────┘  │
//!                 └──────────────────────────────────────────────┘
//! ```
//!
//! The executor performs exactly one HTTP call per invocation and exposes
//! only cancellation: no retries, no pooling policy, no circuit breaking.

// Core
pub mod client;
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use client::{ExecuteError, HttpExecutor, TransportError};
pub use config::ServiceConfig;
pub use http::{Envelope, HostInfo};
pub use lifecycle::{DrainCoordinator, Shutdown};
