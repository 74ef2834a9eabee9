//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     DrainCoordinator::new(drain), constructed once by the entry point
//!     → spawn(): single signal subscription (signals.rs)
//!
//! Termination:
//!     SIGINT/SIGHUP/SIGTERM/SIGUSR1
//!     → log signal, sleep the drain window
//!     → Shutdown::trigger() (shutdown.rs broadcast)
//!     → servers finish in-flight work and return
//!     → entry point exits
//! ```
//!
//! # Design Decisions
//! - Exactly one signal subscription per process; handler constructors
//!   never install their own
//! - The drain window lets load balancers observe the instance before it
//!   goes away
//! - The exit decision stays with the entry point, not with a handler

pub mod drain;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use drain::DrainCoordinator;
pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
pub use startup::{serve, StartupError};
