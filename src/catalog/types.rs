//! Catalog record types and storage-level error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier type for pizza records. Assigned by the store, never by callers.
pub type PizzaId = i64;

/// A pizza menu item.
///
/// `id` is `None` on candidates supplied by callers and populated by the store
/// on insert. `pizza_name` and `pizza_toppings` are free text and may both be
/// absent on malformed input; the menu service rejects a missing name, while
/// toppings pass through unvalidated.
///
/// Wire shape (field renames match the public JSON contract):
/// `{ "id": integer|null, "pizzaToppings": string|null, "pizzaName": string|null }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    #[serde(default)]
    pub id: Option<PizzaId>,

    #[serde(default, rename = "pizzaToppings")]
    pub pizza_toppings: Option<String>,

    #[serde(default, rename = "pizzaName")]
    pub pizza_name: Option<String>,
}

/// Errors that can occur at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists for the given identifier.
    #[error("no pizza with id {0}")]
    NotFound(PizzaId),

    /// Insert rejected by the storage-level uniqueness guard on `pizza_name`.
    #[error("pizza name {0:?} already stored")]
    DuplicateName(String),
}
