//! Authenticated stats-endpoint probing.

use std::time::Duration;

use thiserror::Error;

use crate::config::ProbeConfig;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("stats endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

/// Probes one instance's stats endpoint over HTTP Basic auth.
pub struct HealthProbe {
    client: reqwest::Client,
    username: String,
    password: String,
    stats_port: u16,
    timeout: Duration,
}

impl HealthProbe {
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            username: config.username.clone(),
            password: config.password.clone(),
            stats_port: config.stats_port,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Fetch the stats CSV from one instance.
    ///
    /// Any transport error, timeout, non-success status, or body-read failure
    /// is a probe failure; the raw body is returned only on success.
    pub async fn probe(&self, addr: &str) -> Result<String, ProbeError> {
        let url = format!("http://{}:{}/stats;csv", addr, self.stats_port);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProbeError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}
