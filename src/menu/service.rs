//! Menu business rules.
//!
//! # Responsibilities
//! - Enforce name presence and uniqueness before insert
//! - Translate store-level `NotFound` into a domain failure carrying the id
//!
//! # Design Decisions
//! - Holds `Arc<dyn CatalogStore>` injected at construction; no container
//! - Domain failures are typed `MenuError` results, never panics
//! - Only the name is validated; toppings pass through unchanged

use std::sync::Arc;

use crate::catalog::store::CatalogStore;
use crate::catalog::types::{Pizza, PizzaId};
use crate::menu::types::MenuError;

/// Business-rule layer between the HTTP surface and the catalog store.
pub struct MenuService {
    store: Arc<dyn CatalogStore>,
}

impl MenuService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Fetch a single pizza by id.
    pub fn find_pizza_by_id(&self, id: PizzaId) -> Result<Pizza, MenuError> {
        self.store.get(id).map_err(|_| MenuError::PizzaNotFound(id))
    }

    /// List every pizza. An empty menu is a valid result, not a failure.
    pub fn get_all_pizzas(&self) -> Vec<Pizza> {
        self.store.list_all()
    }

    /// Validate and persist a candidate pizza, returning the stored record
    /// with its assigned id.
    pub fn add_pizza(&self, candidate: Pizza) -> Result<Pizza, MenuError> {
        let name = match candidate.pizza_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(MenuError::InvalidPizzaName),
        };

        // Fast-path check for the friendly message; the store re-checks under
        // its own lock, so a concurrent duplicate still cannot slip through.
        if self.store.find_by_name(&name).is_some() {
            tracing::debug!(pizza_name = %name, "Rejected duplicate pizza");
            return Err(MenuError::DuplicatePizzaName(name));
        }

        let candidate = Pizza {
            id: None, // server-assigned, client-supplied ids ignored
            ..candidate
        };

        // The only insert failure is the storage-level uniqueness guard.
        self.store
            .insert(candidate)
            .map_err(|_| MenuError::DuplicatePizzaName(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::MemoryCatalog;

    fn service() -> MenuService {
        MenuService::new(Arc::new(MemoryCatalog::new()))
    }

    fn candidate(name: Option<&str>, toppings: Option<&str>) -> Pizza {
        Pizza {
            id: None,
            pizza_toppings: toppings.map(str::to_string),
            pizza_name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_add_pizza_assigns_id_and_passes_toppings_through() {
        let service = service();

        let stored = service
            .add_pizza(candidate(Some("Margherita"), Some("tomato,mozzarella")))
            .unwrap();

        assert!(stored.id.is_some());
        assert_eq!(stored.pizza_name.as_deref(), Some("Margherita"));
        assert_eq!(stored.pizza_toppings.as_deref(), Some("tomato,mozzarella"));
    }

    #[test]
    fn test_add_pizza_rejects_missing_name() {
        let service = service();
        assert_eq!(
            service.add_pizza(candidate(None, Some("tomato"))),
            Err(MenuError::InvalidPizzaName)
        );
    }

    #[test]
    fn test_add_pizza_rejects_empty_name() {
        let service = service();
        assert_eq!(
            service.add_pizza(candidate(Some(""), None)),
            Err(MenuError::InvalidPizzaName)
        );
    }

    #[test]
    fn test_add_pizza_rejects_duplicate_name_even_with_new_toppings() {
        let service = service();
        service
            .add_pizza(candidate(Some("Margherita"), Some("tomato")))
            .unwrap();

        assert_eq!(
            service.add_pizza(candidate(Some("Margherita"), Some("burrata"))),
            Err(MenuError::DuplicatePizzaName("Margherita".to_string()))
        );
    }

    #[test]
    fn test_add_pizza_allows_missing_toppings() {
        let service = service();
        let stored = service.add_pizza(candidate(Some("Marinara"), None)).unwrap();
        assert_eq!(stored.pizza_toppings, None);
    }

    #[test]
    fn test_find_pizza_by_id_round_trips_insert() {
        let service = service();
        let stored = service.add_pizza(candidate(Some("Funghi"), None)).unwrap();

        let fetched = service.find_pizza_by_id(stored.id.unwrap()).unwrap();
        assert_eq!(fetched, stored);
    }

    #[test]
    fn test_find_pizza_by_id_missing_carries_requested_id() {
        let service = service();
        assert_eq!(
            service.find_pizza_by_id(999_999),
            Err(MenuError::PizzaNotFound(999_999))
        );
    }

    #[test]
    fn test_get_all_pizzas_is_idempotent() {
        let service = service();
        service.add_pizza(candidate(Some("Margherita"), None)).unwrap();
        service.add_pizza(candidate(Some("Diavola"), None)).unwrap();

        let first = service.get_all_pizzas();
        let second = service.get_all_pizzas();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_get_all_pizzas_empty_menu_is_valid() {
        assert!(service().get_all_pizzas().is_empty());
    }

    #[test]
    fn test_stored_record_appears_in_listing_exactly_once() {
        let service = service();
        let stored = service.add_pizza(candidate(Some("Quattro"), None)).unwrap();

        let listed: Vec<_> = service
            .get_all_pizzas()
            .into_iter()
            .filter(|p| p.id == stored.id)
            .collect();
        assert_eq!(listed, vec![stored]);
    }
}
