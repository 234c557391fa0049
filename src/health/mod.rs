//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Periodic timer (poller.rs)
//!     → probe.rs: GET http://{instance}:{stats_port}/stats;csv
//!     → log + record per-instance result
//! ```
//!
//! # Design Decisions
//! - Probes observe only: a failing instance is logged and recorded, never
//!   switched away from. Failover stays a manual operation.
//! - Probe ordering across instances carries no meaning
//! - The stop signal is honored between ticks; in-flight probes are bounded
//!   by their own timeout

pub mod poller;
pub mod probe;

pub use poller::HealthPoller;
pub use probe::{HealthProbe, ProbeError};
