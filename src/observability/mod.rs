//! Observability subsystem.
//!
//! Structured logging goes through `tracing` and is initialized at startup;
//! this module carries the metrics surface.
//!
//! # Metrics
//! - `failover_instance_up` (gauge): 1=last probe succeeded, 0=failed
//! - `failover_switches_total` (counter): switch attempts by outcome

pub mod metrics;
