//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::get, routing::post};
use tower_http::trace::TraceLayer;

use paystack_types::PaymentGateway;

use super::handlers::{self, AppState};
use crate::PaymentService;

/// HTTP Server for the Paystack bridge.
pub struct HttpServer<G: PaymentGateway> {
    state: Arc<AppState<G>>,
}

impl<G: PaymentGateway> HttpServer<G> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: PaymentService<G>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health::<G>))
            .route("/pay", post(handlers::pay::<G>))
            .route("/status/{reference}", get(handlers::status::<G>))
            .route("/callback", get(handlers::callback::<G>))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
