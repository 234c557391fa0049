//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → chdir → Spawn poller → Serve control API
//!
//! Shutdown:
//!     Ctrl+C → broadcast stop → poller exits loop, server drains
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - One broadcast stop signal shared by every long-running task

pub mod shutdown;

pub use shutdown::Shutdown;
