//! Failover controller binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use proxy_failover::config::loader::load_config;
use proxy_failover::control::ControlServer;
use proxy_failover::health::HealthPoller;
use proxy_failover::lifecycle::Shutdown;
use proxy_failover::state::StateReader;
use proxy_failover::switcher::FailoverController;

#[derive(Parser)]
#[command(name = "proxy-failover")]
#[command(about = "Failover controller for a redundant reverse-proxy pair", long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "proxy_failover=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("proxy-failover v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Arc::new(load_config(&cli.config)?);

    tracing::info!(
        instances = config.proxies.len(),
        bind_address = %config.listener.bind_address,
        poll_interval_secs = config.probe.interval_secs,
        "Configuration loaded"
    );

    if let Some(dir) = &config.working_dir {
        std::env::set_current_dir(dir)?;
        tracing::info!(dir = %dir.display(), "Changed working directory");
    }

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            proxy_failover::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    shutdown.listen_for_ctrl_c();

    let reader = Arc::new(StateReader::new(&config.state_command)?);
    let controller = Arc::new(FailoverController::new(config.clone(), reader.clone()));

    let poller = HealthPoller::new(config.clone());
    let poller_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        poller.run(poller_shutdown).await;
    });

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = ControlServer::new(config.clone(), reader, controller);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
