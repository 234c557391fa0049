//! External command execution.
//!
//! Both the state command and the switch command run through the same
//! runner, so spawn failures and non-zero exits surface as one error type
//! everywhere.

pub mod runner;

pub use runner::{run_command, CommandError};
