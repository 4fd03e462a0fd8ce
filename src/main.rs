//! Pizza Catalog Service
//!
//! A small menu catalog built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │              PIZZA CATALOG                    │
//!                      │                                               │
//!   Client Request     │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!   ──────────────────▶│  │  http   │───▶│  menu   │───▶│ catalog  │  │
//!                      │  │ server  │    │ service │    │  store   │  │
//!   Client Response    │  └─────────┘    └─────────┘    └──────────┘  │
//!   ◀──────────────────│    status +       business       rows in     │
//!                      │    JSON/text      rules          `pizza`     │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │         Cross-Cutting Concerns           │ │
//!                      │  │   ┌─────────┐        ┌───────────────┐   │ │
//!                      │  │   │ config  │        │ observability │   │ │
//!                      │  │   └─────────┘        └───────────────┘   │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! Endpoints:
//! - `GET /menu/pizzas` — list every pizza
//! - `GET /menu/pizzas/{id}` — fetch one pizza (404 if absent)
//! - `POST /menu/pizzas` — add a pizza (409 on invalid or duplicate name)

pub mod catalog;
pub mod config;
pub mod http;
pub mod menu;
pub mod observability;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use crate::catalog::MemoryCatalog;
use crate::config::{load_config, CatalogConfig};
use crate::http::HttpServer;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "pizza-catalog", version, about = "Pizza menu catalog service")]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before logging so the configured filter applies
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => CatalogConfig::default(),
    };

    observability::init_logging(&config.observability.log_filter);

    tracing::info!("pizza-catalog v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.listener.max_body_bytes,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server over a fresh in-memory store
    let store = Arc::new(MemoryCatalog::new());
    let server = HttpServer::new(config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
