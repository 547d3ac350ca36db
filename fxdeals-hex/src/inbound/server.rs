//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use fxdeals_types::DealRepository;

use super::handlers::{self, AppState};
use crate::DealService;

/// Batch size limit used when none is configured.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// HTTP Server for the FX Deals API.
pub struct HttpServer<R: DealRepository> {
    state: Arc<AppState<R>>,
}

impl<R: DealRepository> HttpServer<R> {
    /// Creates a new HTTP server with the default batch size limit.
    pub fn new(service: DealService<R>) -> Self {
        Self::with_max_batch_size(service, DEFAULT_MAX_BATCH_SIZE)
    }

    /// Creates a new HTTP server with a custom batch size limit.
    pub fn with_max_batch_size(service: DealService<R>, max_batch_size: usize) -> Self {
        Self {
            state: Arc::new(AppState {
                service,
                max_batch_size,
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .route(
                "/api/deals",
                post(handlers::import_deal::<R>).get(handlers::list_deals::<R>),
            )
            .route("/api/deals/batch", post(handlers::import_batch::<R>))
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serves on an already bound listener until a shutdown signal arrives.
    pub async fn serve(self, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
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
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
