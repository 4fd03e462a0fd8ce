//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, timeout, body limit)
//!     → handlers.rs (extract id/body, call menu service)
//!     → MenuError → status code translation (handlers.rs, nowhere else)
//!     → JSON or text response to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
