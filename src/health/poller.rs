//! Background health polling.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::config::ControllerConfig;
use crate::health::probe::HealthProbe;
use crate::observability::metrics;

/// Periodic prober for every configured instance.
pub struct HealthPoller {
    config: Arc<ControllerConfig>,
    probe: HealthProbe,
}

impl HealthPoller {
    pub fn new(config: Arc<ControllerConfig>) -> Self {
        let probe = HealthProbe::new(&config.probe);
        Self { config, probe }
    }

    /// Poll every configured instance on a fixed interval until the shutdown
    /// signal arrives.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval_secs = self.config.probe.interval_secs,
            instances = self.config.proxies.len(),
            "Health poller starting"
        );

        let interval = Duration::from_secs(self.config.probe.interval_secs);
        let mut ticker = time::interval(interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.check_all().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Health poller received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    async fn check_all(&self) {
        for addr in &self.config.proxies {
            match self.probe.probe(addr).await {
                Ok(body) => {
                    tracing::debug!(addr = %addr, bytes = body.len(), "Probe succeeded");
                    metrics::record_probe(addr, true);
                }
                Err(e) => {
                    tracing::warn!(addr = %addr, error = %e, "Probe failed");
                    metrics::record_probe(addr, false);
                }
            }
        }
    }
}
