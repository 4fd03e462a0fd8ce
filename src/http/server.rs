//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the menu routes
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - All collaborators are constructed explicitly: store → menu service →
//!   handlers, threaded through `AppState`; no runtime container
//! - Requests are independent; no cross-request state beyond the store

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::store::CatalogStore;
use crate::config::CatalogConfig;
use crate::http::handlers;
use crate::menu::service::MenuService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<MenuService>,
}

/// HTTP server for the pizza catalog.
pub struct HttpServer {
    router: Router,
    config: CatalogConfig,
}

impl HttpServer {
    /// Create a new HTTP server over the given catalog store.
    pub fn new(config: CatalogConfig, store: Arc<dyn CatalogStore>) -> Self {
        let menu = Arc::new(MenuService::new(store));
        let state = AppState { menu };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &CatalogConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/menu/pizzas",
                get(handlers::list_pizzas).post(handlers::add_pizza),
            )
            .route("/menu/pizzas/{id}", get(handlers::get_pizza))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
