//! Catalog persistence subsystem.
//!
//! # Data Flow
//! ```text
//! menu service call
//!     → store.rs (CatalogStore trait — the persistence seam)
//!     → memory.rs (in-memory rows mirroring the `pizza` table)
//!     → types.rs (Pizza record ↔ wire/storage shapes)
//! ```
//!
//! # Design Decisions
//! - The trait is the boundary; callers never name a concrete backing
//! - Id assignment and the name uniqueness guard live inside the store,
//!   atomic with the insert itself

pub mod memory;
pub mod store;
pub mod types;

pub use memory::MemoryCatalog;
pub use store::CatalogStore;
pub use types::{Pizza, PizzaId, StoreError};
