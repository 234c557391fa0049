//! Subprocess runner with captured output.

use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;

/// Error from spawning or running an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Run an external command to completion and capture its stdout.
///
/// Stdout is decoded lossily; external tooling is not required to emit UTF-8.
/// A non-zero exit is an error carrying the command's stderr.
pub async fn run_command(program: &str, args: &[String]) -> Result<String, CommandError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            program: program.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
