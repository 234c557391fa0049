//! Active-state derivation subsystem.
//!
//! # Data Flow
//! ```text
//! state command (external executable)
//!     → reader.rs (run, capture stdout)
//!     → named-capture extraction (`active_ip`)
//!     → Option<String> active instance address
//! ```
//!
//! # Design Decisions
//! - The external command is the source of truth; nothing is cached
//! - "No match" and "command failed" are distinct outcomes
//! - Extraction indexes capture groups by name only, never by position

pub mod reader;

pub use reader::{extract_named, StateError, StateReader, ACTIVE_GROUP};
