//! Switch-command invocation.

use crate::command::{run_command, CommandError};
use crate::config::SwitchCommandConfig;
use crate::switcher::template;

/// Renders switch arguments and runs the configured switch command.
pub struct SwitchExecutor {
    program: String,
    arg_templates: Vec<String>,
}

impl SwitchExecutor {
    pub fn new(config: &SwitchCommandConfig) -> Self {
        Self {
            program: config.program.clone(),
            arg_templates: config.arg_templates.clone(),
        }
    }

    /// Render the configured argument templates for `target`.
    pub fn render_args(&self, target: &str) -> Vec<String> {
        template::render_args(&self.arg_templates, target)
    }

    /// Invoke the switch command with already-rendered arguments.
    ///
    /// Returns the command's stdout verbatim; this is the operation's
    /// human-readable result.
    pub async fn invoke(&self, args: &[String]) -> Result<String, CommandError> {
        tracing::info!(program = %self.program, args = ?args, "Invoking switch command");
        run_command(&self.program, args).await
    }
}
