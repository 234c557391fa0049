//! Metrics collection and exposition.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter, serving scrapes on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record the outcome of one instance probe.
pub fn record_probe(addr: &str, healthy: bool) {
    metrics::gauge!("failover_instance_up", "instance" => addr.to_string())
        .set(if healthy { 1.0 } else { 0.0 });
}

/// Count one switch attempt by outcome (`switched`, `noop`, `error`).
pub fn record_switch(outcome: &'static str) {
    metrics::counter!("failover_switches_total", "outcome" => outcome).increment(1);
}
