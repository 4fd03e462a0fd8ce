//! Menu business subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → service.rs (validate name, check uniqueness, delegate to store)
//!     → types.rs (typed domain failures)
//! ```
//!
//! # Design Decisions
//! - This layer owns every business invariant the store does not enforce
//! - Failures are values; the HTTP surface alone turns them into status codes

pub mod service;
pub mod types;

pub use service::MenuService;
pub use types::MenuError;
