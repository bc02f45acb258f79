//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Resolve config → Init logging/metrics → Build HttpServer → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Trigger or signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::{wait_for_shutdown, Shutdown};
