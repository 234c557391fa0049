//! Switching subsystem.
//!
//! # Data Flow
//! ```text
//! GET /switch
//!     → controller.rs (read active, pick alternative, guard no-ops)
//!     → template.rs (render argument templates against the target)
//!     → executor.rs (invoke the switch command)
//!     → raw command output back to the caller
//! ```
//!
//! # Design Decisions
//! - The no-op guard re-reads the active state immediately before invoking
//! - Switches are serialized in-process; the read-then-invoke pair still has
//!   no atomicity against external actors
//! - Template failures skip the argument, they do not abort the switch

pub mod controller;
pub mod executor;
pub mod template;

pub use controller::{FailoverController, FailoverReport, SwitchError, SwitchOutcome};
pub use executor::SwitchExecutor;
pub use template::RenderError;
