//! Control endpoint handlers.

use std::fmt::Write;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::control::server::AppState;
use crate::switcher::{FailoverReport, SwitchOutcome};

/// Capability listing served on `/` and `/ping`.
pub async fn index() -> &'static str {
    "Available endpoints: /state, /ping, /switch"
}

/// Current active instance, derived fresh from the state command.
pub async fn get_state(State(state): State<AppState>) -> String {
    match state.reader.read_active().await {
        Ok(Some(active)) => format!("Active: {active}"),
        Ok(None) => "Active: ".to_string(),
        Err(e) => format!("Active: \nstate command error: {e}"),
    }
}

/// Trigger a switch to the alternative instance.
pub async fn trigger_switch(State(state): State<AppState>) -> String {
    let report = state.controller.failover().await;
    render_report(&report)
}

fn render_report(report: &FailoverReport) -> String {
    let mut body = String::new();

    match &report.previous {
        Ok(Some(active)) => {
            let _ = writeln!(body, "Active: {active}");
        }
        Ok(None) => body.push_str("Active: \n"),
        Err(e) => {
            let _ = writeln!(body, "Active: \nstate command error: {e}");
        }
    }

    match &report.target {
        Some(target) => {
            let _ = writeln!(body, "New Active: {target}");
        }
        None => body.push_str("New Active: \nno alternative instance configured\n"),
    }

    body.push_str("Command Result\n");
    match &report.outcome {
        Some(Ok(SwitchOutcome::Switched { output })) => body.push_str(output),
        Some(Ok(SwitchOutcome::NoOp)) => {}
        Some(Err(e)) => {
            let _ = writeln!(body, "switch command error: {e}");
        }
        None => {}
    }

    body
}

#[derive(Serialize)]
pub struct ControllerStatus {
    pub version: &'static str,
    pub instances: Vec<String>,
    pub poll_interval_secs: u64,
    pub probe_timeout_secs: u64,
}

/// Read-only configuration snapshot.
pub async fn get_status(State(state): State<AppState>) -> Json<ControllerStatus> {
    Json(ControllerStatus {
        version: env!("CARGO_PKG_VERSION"),
        instances: state.config.proxies.clone(),
        poll_interval_secs: state.config.probe.interval_secs,
        probe_timeout_secs: state.config.probe.timeout_secs,
    })
}
