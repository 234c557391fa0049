//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ControllerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ControllerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ControllerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/failover.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failover.toml");
        fs::write(
            &path,
            r#"
                proxies = ["10.0.0.1", "10.0.0.2"]

                [state_command]
                program = "/usr/local/bin/report-state"
                pattern = 'active_ip=(?P<active_ip>[0-9.]+)'

                [switch_command]
                program = "/usr/local/bin/move-vip"
                arg_templates = ["--ip={target}"]
            "#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.proxies.len(), 2);
        assert_eq!(config.switch_command.program, "/usr/local/bin/move-vip");
    }

    #[test]
    fn test_load_invalid_config_reports_all_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failover.toml");
        fs::write(&path, "proxies = []\n").unwrap();

        let err = load_config(&path).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert!(errors.len() >= 3),
            other => panic!("expected validation error, got {other}"),
        }
    }
}
