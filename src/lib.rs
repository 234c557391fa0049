//! Failover controller for a redundant reverse-proxy pair.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │              FAILOVER CONTROLLER             │
//!                      │                                              │
//!   GET /switch ───────┼─▶ control ──▶ switcher ──▶ state reader ─────┼──▶ state command
//!   GET /state         │                  │                           │
//!                      │                  └───────────────────────────┼──▶ switch command
//!                      │                                              │
//!   timer tick ────────┼─▶ health poller ─────────────────────────────┼──▶ GET http://{instance}:1936/stats;csv
//!                      │                                              │
//!                      │  ┌────────────────────────────────────────┐  │
//!                      │  │          Cross-Cutting Concerns        │  │
//!                      │  │   config   lifecycle   observability   │  │
//!                      │  └────────────────────────────────────────┘  │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! The active instance is never cached in-process: every query re-runs the
//! external state command, so the external world stays the single source of
//! truth. The health poller observes instance liveness and logs failures;
//! switching remains a manual operation triggered over HTTP.

// Core subsystems
pub mod command;
pub mod config;
pub mod control;
pub mod state;
pub mod switcher;

// Instance monitoring
pub mod health;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ControllerConfig;
pub use control::ControlServer;
pub use lifecycle::Shutdown;
pub use switcher::FailoverController;
