//! Control-plane HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! GET /state   → handlers.rs → StateReader (fresh external read)
//! GET /switch  → handlers.rs → FailoverController::failover
//! GET /status  → handlers.rs → config snapshot as JSON
//! GET /, /ping → static capability listing
//! ```
//!
//! # Design Decisions
//! - Stateless: every request re-derives state, nothing is cached
//! - Every control response is 200 with best-effort plain text; failures are
//!   distinguished in the body, not the status code

pub mod handlers;
pub mod server;

pub use server::{AppState, ControlServer};
