//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! controller. All types derive Serde traits for deserialization from config
//! files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the failover controller.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ControllerConfig {
    /// Proxy instance addresses, in preference order.
    ///
    /// The supported topology is an active/standby pair. With more than two
    /// entries the switch target is the first instance that is not currently
    /// active.
    pub proxies: Vec<String>,

    /// Control listener configuration.
    pub listener: ListenerConfig,

    /// Stats-endpoint probing settings.
    pub probe: ProbeConfig,

    /// External command that reports the active instance.
    pub state_command: StateCommandConfig,

    /// External command that switches the active instance.
    pub switch_command: SwitchCommandConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Working directory entered at startup, before any external command
    /// runs.
    pub working_dir: Option<PathBuf>,
}

/// Control listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    ///
    /// External commands invoked from a handler have no timeout of their own;
    /// this bounds the whole request instead.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Health probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Username for HTTP Basic authentication against the stats endpoint.
    pub username: String,

    /// Password for HTTP Basic authentication against the stats endpoint.
    pub password: String,

    /// Poll interval in seconds.
    pub interval_secs: u64,

    /// Per-probe timeout in seconds.
    pub timeout_secs: u64,

    /// Port the instances serve their stats page on.
    pub stats_port: u16,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            interval_secs: 10,
            timeout_secs: 5,
            stats_port: 1936,
        }
    }
}

/// External command that reports which instance is active.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StateCommandConfig {
    /// Program to execute.
    pub program: String,

    /// Fixed argument list; no templating.
    pub args: Vec<String>,

    /// Pattern applied to the command's stdout. Must contain a capture group
    /// named `active_ip`.
    pub pattern: String,
}

impl Default for StateCommandConfig {
    fn default() -> Self {
        Self {
            program: String::new(),
            args: Vec::new(),
            pattern: r"(?P<active_ip>\d{1,3}(?:\.\d{1,3}){3})".to_string(),
        }
    }
}

/// External command that switches the active instance.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SwitchCommandConfig {
    /// Program to execute.
    pub program: String,

    /// Argument templates, rendered against the switch target. `{target}`
    /// expands to the target address; arguments rendering empty are dropped.
    pub arg_templates: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
