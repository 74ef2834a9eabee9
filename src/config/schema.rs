//! Configuration schema definitions.
//!
//! Plain data handed to the HTTP server and lifecycle coordinator at
//! startup. All fields have defaults so a minimal deployment needs nothing.

use serde::{Deserialize, Serialize};

use crate::config::env;

/// Service-level settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Bind address for the health/version endpoints (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Version string reported by the health and version endpoints.
    pub version: String,

    /// Seconds to keep serving after a termination signal before shutdown.
    pub drain_secs: u64,
}

impl ServiceConfig {
    /// Resolve settings from the environment, falling back to the built-in
    /// defaults. Keys follow the flag naming scheme: `bind-address` →
    /// `BIND_ADDRESS`, `service-version` → `SERVICE_VERSION`,
    /// `drain-duration` → `DRAIN_DURATION` (seconds).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: env::lookup("bind-address").unwrap_or(defaults.bind_address),
            version: env::lookup("service-version").unwrap_or(defaults.version),
            drain_secs: env::duration_or("drain-duration", defaults.drain_secs),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            drain_secs: 10,
        }
    }
}
