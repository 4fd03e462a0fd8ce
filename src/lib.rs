//! Pizza Catalog Service Library

pub mod catalog;
pub mod config;
pub mod http;
pub mod menu;
pub mod observability;

pub use catalog::{CatalogStore, MemoryCatalog, Pizza, PizzaId};
pub use config::CatalogConfig;
pub use http::HttpServer;
pub use menu::{MenuError, MenuService};
