//! Active-instance lookup via the external state command.

use regex::Regex;
use thiserror::Error;

use crate::command::{run_command, CommandError};
use crate::config::StateCommandConfig;

/// Name of the capture group carrying the active instance address.
pub const ACTIVE_GROUP: &str = "active_ip";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state command failed: {0}")]
    Command(#[from] CommandError),
}

/// Derives the currently active instance by running the configured state
/// command and matching its output.
pub struct StateReader {
    program: String,
    args: Vec<String>,
    pattern: Regex,
}

impl StateReader {
    /// Build a reader, compiling the configured pattern once.
    pub fn new(config: &StateCommandConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            program: config.program.clone(),
            args: config.args.clone(),
            pattern: Regex::new(&config.pattern)?,
        })
    }

    /// Derive the currently active instance.
    ///
    /// The state command is re-run on every call. `Ok(None)` means the
    /// command ran but its output named no active instance, which is distinct
    /// from the command failing outright.
    pub async fn read_active(&self) -> Result<Option<String>, StateError> {
        let output = run_command(&self.program, &self.args).await?;
        Ok(extract_named(&self.pattern, &output, ACTIVE_GROUP))
    }
}

/// Extract a named capture group from the first match of `pattern` in `text`.
///
/// A failed overall match yields `None`, never a partial mapping.
pub fn extract_named(pattern: &Regex, text: &str, group: &str) -> Option<String> {
    pattern
        .captures(text)?
        .name(group)
        .map(|m| m.as_str().to_string())
}
