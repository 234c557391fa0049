//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the instance list is meaningful
//! - Validate value ranges (intervals > 0)
//! - Compile the state pattern and check the `active_ip` group exists
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ControllerConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use regex::Regex;
use thiserror::Error;

use crate::config::schema::ControllerConfig;
use crate::state::ACTIVE_GROUP;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("no proxy instances configured")]
    NoProxies,

    #[error("duplicate proxy instance '{0}'")]
    DuplicateProxy(String),

    #[error("listener bind address is not set")]
    MissingBindAddress,

    #[error("probe interval must be greater than zero")]
    ZeroInterval,

    #[error("probe timeout must be greater than zero")]
    ZeroTimeout,

    #[error("state command program is not set")]
    MissingStateProgram,

    #[error("switch command program is not set")]
    MissingSwitchProgram,

    #[error("state pattern does not compile: {0}")]
    BadPattern(String),

    #[error("state pattern has no capture group named '{0}'")]
    MissingActiveGroup(&'static str),
}

/// Check a deserialized configuration for semantic problems.
pub fn validate_config(config: &ControllerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.proxies.is_empty() {
        errors.push(ValidationError::NoProxies);
    }
    for (i, addr) in config.proxies.iter().enumerate() {
        if config.proxies[..i].contains(addr) {
            errors.push(ValidationError::DuplicateProxy(addr.clone()));
        }
    }

    if config.listener.bind_address.is_empty() {
        errors.push(ValidationError::MissingBindAddress);
    }

    if config.probe.interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if config.probe.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.state_command.program.is_empty() {
        errors.push(ValidationError::MissingStateProgram);
    }
    if config.switch_command.program.is_empty() {
        errors.push(ValidationError::MissingSwitchProgram);
    }

    match Regex::new(&config.state_command.pattern) {
        Ok(pattern) => {
            let has_group = pattern
                .capture_names()
                .any(|name| name == Some(ACTIVE_GROUP));
            if !has_group {
                errors.push(ValidationError::MissingActiveGroup(ACTIVE_GROUP));
            }
        }
        Err(e) => errors.push(ValidationError::BadPattern(e.to_string())),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
