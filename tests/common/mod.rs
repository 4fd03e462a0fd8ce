//! Shared utilities for integration testing.

use std::sync::Arc;

use tokio::net::TcpListener;

use pizza_catalog::catalog::MemoryCatalog;
use pizza_catalog::config::CatalogConfig;
use pizza_catalog::http::HttpServer;

/// Start a catalog server on an ephemeral port with a fresh empty store.
/// Returns the base URL (e.g., "http://127.0.0.1:54321").
pub async fn spawn_catalog() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = CatalogConfig::default();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::new(config, Arc::new(MemoryCatalog::new()));
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{addr}")
}
