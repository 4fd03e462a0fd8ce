//! Catalog store contract.
//!
//! # Responsibilities
//! - Define the persistence seam for pizza records
//! - Keep callers independent of the backing implementation
//!
//! # Design Decisions
//! - Object-safe trait shared as `Arc<dyn CatalogStore>` (explicit wiring,
//!   no container)
//! - Methods are synchronous; backings must not block meaningfully
//! - Absence is `None` for name lookup but an error for id lookup, because
//!   id lookup callers always expect the record to exist

use crate::catalog::types::{Pizza, PizzaId, StoreError};

/// Persistence contract for pizza records.
///
/// Any backing satisfying these four operations is valid. The shipped
/// implementation is [`MemoryCatalog`](crate::catalog::memory::MemoryCatalog).
pub trait CatalogStore: Send + Sync {
    /// Return the record with the given id, or `StoreError::NotFound`.
    fn get(&self, id: PizzaId) -> Result<Pizza, StoreError>;

    /// Return the record whose name equals `name` exactly (case-sensitive),
    /// or `None`. Absence is not a failure.
    fn find_by_name(&self, name: &str) -> Option<Pizza>;

    /// Return every stored record. The in-memory backing preserves insertion
    /// order; other backings may not.
    fn list_all(&self) -> Vec<Pizza>;

    /// Persist a new record, assigning a fresh unique id, and return the
    /// stored record with the id populated. Never overwrites. Fails with
    /// `StoreError::DuplicateName` if the name uniqueness guard rejects it;
    /// callers should pre-check with `find_by_name` for a friendlier error.
    fn insert(&self, candidate: Pizza) -> Result<Pizza, StoreError>;
}
