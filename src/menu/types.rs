//! Menu service error definitions.

use thiserror::Error;

use crate::catalog::types::PizzaId;

/// Domain failures from menu operations.
///
/// Display strings double as the HTTP response body text, so they are part of
/// the public contract and must not be reworded casually.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// Lookup by id found no record.
    #[error("Pizza with id {0} not found")]
    PizzaNotFound(PizzaId),

    /// Candidate pizza has no usable name. The trailing space in the message
    /// is part of the wire contract.
    #[error("Invalid pizza name ")]
    InvalidPizzaName,

    /// Candidate pizza's name collides with an existing record.
    #[error("Pizza {0} already exists")]
    DuplicatePizzaName(String),
}
