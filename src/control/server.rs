//! Control-plane HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all control handlers
//! - Wire up middleware (tracing, request timeout)
//! - Serve until the shutdown signal arrives

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ControllerConfig;
use crate::control::handlers;
use crate::state::StateReader;
use crate::switcher::FailoverController;

/// Shared state injected into control handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ControllerConfig>,
    pub reader: Arc<StateReader>,
    pub controller: Arc<FailoverController>,
}

/// HTTP server for the control plane.
pub struct ControlServer {
    router: Router,
}

impl ControlServer {
    /// Create a new control server over the shared subsystems.
    pub fn new(
        config: Arc<ControllerConfig>,
        reader: Arc<StateReader>,
        controller: Arc<FailoverController>,
    ) -> Self {
        let state = AppState {
            config: config.clone(),
            reader,
            controller,
        };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ControllerConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route("/ping", get(handlers::index))
            .route("/state", get(handlers::get_state))
            .route("/switch", get(handlers::trigger_switch))
            .route("/status", get(handlers::get_status))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve on the given listener until the shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Control server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Control server stopped");
        Ok(())
    }
}
