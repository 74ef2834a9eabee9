//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (set by deploy tooling)
//!     → env.rs (key transform, typed lookup)
//!     → clap flag defaults (flag > env > built-in default)
//!     → ServiceConfig (immutable for the process lifetime)
//!     → handed to http server and lifecycle at startup
//! ```
//!
//! # Design Decisions
//! - Env keys derive mechanically from flag names (uppercase, `-` → `_`)
//! - An unparseable env value falls back to the built-in default instead of
//!   failing boot
//! - Config is plain data; no hot reload

pub mod env;
pub mod schema;

pub use schema::ServiceConfig;
