//! HTTP-facing helpers: the response envelope and the stock endpoints.
//!
//! # Data Flow
//! ```text
//! startup:
//!     HostInfo::resolve() → AppState { host, version }
//!     → handlers.rs (router: /healthz, /version, 404 fallback)
//!     → server.rs (serve until the shutdown broadcast fires)
//!
//! per request:
//!     handler builds Envelope (envelope.rs)
//!     → JSON body with status / request_id / version / data / error / host
//! ```
//!
//! # Design Decisions
//! - `host` is resolved once at startup, fallibly, by the entry point,
//!   never by module-load-time state
//! - Optional envelope fields are omitted from the JSON when empty
//! - Envelope encoding failures degrade to an internal-error envelope

pub mod envelope;
pub mod handlers;
pub mod server;

pub use envelope::{Envelope, HostInfo};
pub use handlers::{router, AppState};
pub use server::run;
