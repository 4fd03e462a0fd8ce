//! In-memory catalog store.
//!
//! # Responsibilities
//! - Back the `CatalogStore` trait with process-local state
//! - Assign identifiers and enforce the name uniqueness guard atomically
//! - Map between the `Pizza` record and the stored row shape
//!
//! # Design Decisions
//! - Rows mirror the relational `pizza` table (id, pizza_name,
//!   pizza_toppings) so the record/row mapping lives in exactly one place
//! - One `Mutex` over rows + id counter; held only within a method call,
//!   never across an await
//! - Append-only `Vec` of rows, so `list_all` is insertion-ordered

use std::sync::Mutex;

use crate::catalog::store::CatalogStore;
use crate::catalog::types::{Pizza, PizzaId, StoreError};

/// Stored row, matching the `pizza` table columns.
#[derive(Debug, Clone)]
struct PizzaRow {
    id: PizzaId,
    pizza_name: Option<String>,
    pizza_toppings: Option<String>,
}

impl PizzaRow {
    /// Row → record. The single mapping point in this direction.
    fn to_record(&self) -> Pizza {
        Pizza {
            id: Some(self.id),
            pizza_toppings: self.pizza_toppings.clone(),
            pizza_name: self.pizza_name.clone(),
        }
    }

    /// Candidate record → row with a freshly assigned id. Any client-supplied
    /// id is discarded here.
    fn from_candidate(id: PizzaId, candidate: Pizza) -> Self {
        Self {
            id,
            pizza_name: candidate.pizza_name,
            pizza_toppings: candidate.pizza_toppings,
        }
    }
}

#[derive(Debug)]
struct Inner {
    rows: Vec<PizzaRow>,
    next_id: PizzaId,
}

/// Process-local implementation of [`CatalogStore`].
#[derive(Debug)]
pub struct MemoryCatalog {
    inner: Mutex<Inner>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Poisoning only happens if a holder panicked; the rows are still
        // consistent because every mutation completes before the guard drops.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for MemoryCatalog {
    fn get(&self, id: PizzaId) -> Result<Pizza, StoreError> {
        self.lock()
            .rows
            .iter()
            .find(|row| row.id == id)
            .map(PizzaRow::to_record)
            .ok_or(StoreError::NotFound(id))
    }

    fn find_by_name(&self, name: &str) -> Option<Pizza> {
        self.lock()
            .rows
            .iter()
            .find(|row| row.pizza_name.as_deref() == Some(name))
            .map(PizzaRow::to_record)
    }

    fn list_all(&self) -> Vec<Pizza> {
        self.lock().rows.iter().map(PizzaRow::to_record).collect()
    }

    fn insert(&self, candidate: Pizza) -> Result<Pizza, StoreError> {
        let mut inner = self.lock();

        // Authoritative uniqueness guard: checked under the same lock that
        // assigns the id, so two concurrent inserts of the same name cannot
        // both succeed even if both passed the service-level pre-check.
        if let Some(name) = candidate.pizza_name.as_deref() {
            if inner.rows.iter().any(|row| row.pizza_name.as_deref() == Some(name)) {
                return Err(StoreError::DuplicateName(name.to_string()));
            }
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let row = PizzaRow::from_candidate(id, candidate);
        let stored = row.to_record();
        inner.rows.push(row);
        Ok(stored)
    }
}
