//! Failover orchestration.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::command::CommandError;
use crate::config::ControllerConfig;
use crate::observability::metrics;
use crate::state::{StateError, StateReader};
use crate::switcher::executor::SwitchExecutor;

/// Outcome of a switch request.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchOutcome {
    /// The target was already active; the switch command was not invoked.
    NoOp,
    /// The switch command ran; its stdout is attached verbatim.
    Switched { output: String },
}

#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("switch command failed: {0}")]
    Command(#[from] CommandError),
}

/// Report from a full failover pass (read, select, switch).
#[derive(Debug)]
pub struct FailoverReport {
    /// Active instance before the switch, as derived at the start of the
    /// pass.
    pub previous: Result<Option<String>, StateError>,
    /// Selected switch target; `None` when no alternative exists.
    pub target: Option<String>,
    /// Outcome of the switch attempt; `None` when no switch was attempted.
    pub outcome: Option<Result<SwitchOutcome, SwitchError>>,
}

/// Orchestrates state reads and switch invocations into one coherent,
/// idempotent-when-no-op operation.
pub struct FailoverController {
    config: Arc<ControllerConfig>,
    reader: Arc<StateReader>,
    executor: SwitchExecutor,
    /// Serializes read-then-invoke so two in-process switch requests cannot
    /// interleave. External actors are not covered by this lock.
    switch_lock: Mutex<()>,
}

impl FailoverController {
    pub fn new(config: Arc<ControllerConfig>, reader: Arc<StateReader>) -> Self {
        let executor = SwitchExecutor::new(&config.switch_command);
        Self {
            config,
            reader,
            executor,
            switch_lock: Mutex::new(()),
        }
    }

    /// First configured instance that is not `current`.
    ///
    /// With an active/standby pair this toggles; with more instances it is
    /// deterministically the first non-active entry in configured order.
    pub fn alternative_of(&self, current: &str) -> Option<&str> {
        self.config
            .proxies
            .iter()
            .map(String::as_str)
            .find(|addr| *addr != current)
    }

    /// Switch the active instance to `target`.
    ///
    /// The active state is re-read first; a switch whose target is already
    /// active is a no-op and never reaches the external command. A failed
    /// state read leaves the current instance unknown and the switch
    /// proceeds.
    pub async fn switch_to(&self, target: &str) -> Result<SwitchOutcome, SwitchError> {
        let _guard = self.switch_lock.lock().await;
        self.switch_to_locked(target).await
    }

    async fn switch_to_locked(&self, target: &str) -> Result<SwitchOutcome, SwitchError> {
        match self.reader.read_active().await {
            Ok(Some(current)) if current == target => {
                tracing::info!(target = %target, "Target already active, skipping switch");
                metrics::record_switch("noop");
                return Ok(SwitchOutcome::NoOp);
            }
            Ok(current) => {
                tracing::info!(current = ?current, target = %target, "Switching active instance");
            }
            Err(e) => {
                tracing::warn!(error = %e, target = %target, "State read failed before switch, proceeding");
            }
        }

        let args = self.executor.render_args(target);
        match self.executor.invoke(&args).await {
            Ok(output) => {
                metrics::record_switch("switched");
                Ok(SwitchOutcome::Switched { output })
            }
            Err(e) => {
                metrics::record_switch("error");
                Err(e.into())
            }
        }
    }

    /// Full failover pass: derive the active instance, pick the alternative,
    /// switch to it.
    ///
    /// When no alternative exists the switch command is not invoked at all.
    pub async fn failover(&self) -> FailoverReport {
        let _guard = self.switch_lock.lock().await;

        let previous = self.reader.read_active().await;
        if let Err(e) = &previous {
            tracing::warn!(error = %e, "State read failed during failover");
        }

        let current = match &previous {
            Ok(Some(active)) => active.as_str(),
            _ => "",
        };
        let target = self.alternative_of(current).map(str::to_string);

        let outcome = match &target {
            Some(target) => Some(self.switch_to_locked(target).await),
            None => {
                tracing::warn!(current = %current, "No alternative instance to switch to");
                None
            }
        };

        FailoverReport {
            previous,
            target,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StateCommandConfig, SwitchCommandConfig};

    fn build(
        proxies: &[&str],
        state: StateCommandConfig,
        switch: SwitchCommandConfig,
    ) -> FailoverController {
        let mut config = ControllerConfig::default();
        config.proxies = proxies.iter().map(|s| s.to_string()).collect();
        config.state_command = state;
        config.switch_command = switch;
        let config = Arc::new(config);
        let reader = Arc::new(StateReader::new(&config.state_command).unwrap());
        FailoverController::new(config, reader)
    }

    fn echo_state(line: &str) -> StateCommandConfig {
        StateCommandConfig {
            program: "echo".into(),
            args: vec![line.into()],
            pattern: r"active_ip=(?P<active_ip>[0-9.]+)".into(),
        }
    }

    fn echo_switch() -> SwitchCommandConfig {
        SwitchCommandConfig {
            program: "echo".into(),
            arg_templates: vec!["--ip={target}".into()],
        }
    }

    #[test]
    fn test_alternative_of_pair_toggles() {
        let ctrl = build(
            &["10.0.0.1", "10.0.0.2"],
            echo_state("active_ip=10.0.0.1"),
            echo_switch(),
        );
        assert_eq!(ctrl.alternative_of("10.0.0.1"), Some("10.0.0.2"));
        assert_eq!(ctrl.alternative_of("10.0.0.2"), Some("10.0.0.1"));
    }

    #[test]
    fn test_alternative_of_many_picks_first_other() {
        let ctrl = build(
            &["10.0.0.1", "10.0.0.2", "10.0.0.3"],
            echo_state("active_ip=10.0.0.2"),
            echo_switch(),
        );
        assert_eq!(ctrl.alternative_of("10.0.0.2"), Some("10.0.0.1"));
        assert_eq!(ctrl.alternative_of("10.0.0.1"), Some("10.0.0.2"));
    }

    #[test]
    fn test_alternative_of_single_instance_is_none() {
        let ctrl = build(
            &["10.0.0.1"],
            echo_state("active_ip=10.0.0.1"),
            echo_switch(),
        );
        assert_eq!(ctrl.alternative_of("10.0.0.1"), None);
    }

    #[tokio::test]
    async fn test_switch_to_active_target_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("invoked");
        let ctrl = build(
            &["10.0.0.1", "10.0.0.2"],
            echo_state("active_ip=10.0.0.2"),
            SwitchCommandConfig {
                program: "sh".into(),
                arg_templates: vec![
                    "-c".into(),
                    format!("echo ran >> {}", marker.display()),
                ],
            },
        );

        let outcome = ctrl.switch_to("10.0.0.2").await.unwrap();
        assert_eq!(outcome, SwitchOutcome::NoOp);
        assert!(!marker.exists(), "no-op switch must not invoke the command");
    }

    #[tokio::test]
    async fn test_switch_to_other_target_invokes_command() {
        let ctrl = build(
            &["10.0.0.1", "10.0.0.2"],
            echo_state("active_ip=10.0.0.1"),
            echo_switch(),
        );
        let outcome = ctrl.switch_to("10.0.0.2").await.unwrap();
        assert_eq!(
            outcome,
            SwitchOutcome::Switched {
                output: "--ip=10.0.0.2\n".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_switch_proceeds_when_state_read_fails() {
        let ctrl = build(
            &["10.0.0.1", "10.0.0.2"],
            StateCommandConfig {
                program: "/nonexistent/report-state".into(),
                args: Vec::new(),
                pattern: r"(?P<active_ip>[0-9.]+)".into(),
            },
            echo_switch(),
        );
        let outcome = ctrl.switch_to("10.0.0.2").await.unwrap();
        assert!(matches!(outcome, SwitchOutcome::Switched { .. }));
    }

    #[tokio::test]
    async fn test_failover_reports_previous_and_target() {
        let ctrl = build(
            &["10.0.0.1", "10.0.0.2"],
            echo_state("active_ip=10.0.0.1"),
            echo_switch(),
        );
        let report = ctrl.failover().await;
        assert_eq!(report.previous.unwrap(), Some("10.0.0.1".to_string()));
        assert_eq!(report.target.as_deref(), Some("10.0.0.2"));
        assert!(matches!(
            report.outcome,
            Some(Ok(SwitchOutcome::Switched { .. }))
        ));
    }

    #[tokio::test]
    async fn test_failover_without_alternative_skips_switch() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("invoked");
        let ctrl = build(
            &["10.0.0.1"],
            echo_state("active_ip=10.0.0.1"),
            SwitchCommandConfig {
                program: "sh".into(),
                arg_templates: vec![
                    "-c".into(),
                    format!("echo ran >> {}", marker.display()),
                ],
            },
        );

        let report = ctrl.failover().await;
        assert_eq!(report.target, None);
        assert!(report.outcome.is_none());
        assert!(!marker.exists());
    }
}
