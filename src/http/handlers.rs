//! Menu endpoint handlers.
//!
//! # Responsibilities
//! - Map the three menu routes onto the menu service
//! - Translate domain failures into HTTP status codes and text bodies
//!
//! # Design Decisions
//! - This is the only layer that turns a `MenuError` into a status code
//! - The path id is extracted as a string so an unparseable id yields 404,
//!   matching the not-found contract, instead of the extractor's default 400
//! - Malformed JSON bodies are rejected by the `Json` extractor before the
//!   service layer runs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::catalog::types::{Pizza, PizzaId};
use crate::http::server::AppState;
use crate::menu::types::MenuError;

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        let status = match self {
            MenuError::PizzaNotFound(_) => StatusCode::NOT_FOUND,
            MenuError::InvalidPizzaName | MenuError::DuplicatePizzaName(_) => {
                StatusCode::CONFLICT
            }
        };
        (status, self.to_string()).into_response()
    }
}

/// `GET /menu/pizzas/{id}`
pub async fn get_pizza(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id: PizzaId = match id.parse() {
        Ok(id) => id,
        Err(_) => {
            tracing::debug!(raw_id = %id, "Unparseable pizza id");
            return (StatusCode::NOT_FOUND, format!("Pizza with id {id} not found"))
                .into_response();
        }
    };

    match state.menu.find_pizza_by_id(id) {
        Ok(pizza) => Json(pizza).into_response(),
        Err(err) => {
            tracing::debug!(pizza_id = id, error = %err, "Pizza lookup failed");
            err.into_response()
        }
    }
}

/// `GET /menu/pizzas`
pub async fn list_pizzas(State(state): State<AppState>) -> Json<Vec<Pizza>> {
    Json(state.menu.get_all_pizzas())
}

/// `POST /menu/pizzas`
pub async fn add_pizza(
    State(state): State<AppState>,
    Json(candidate): Json<Pizza>,
) -> Response {
    match state.menu.add_pizza(candidate) {
        Ok(stored) => {
            tracing::info!(
                pizza_id = stored.id,
                pizza_name = stored.pizza_name.as_deref().unwrap_or(""),
                "Pizza added"
            );
            Json(stored).into_response()
        }
        Err(err) => {
            tracing::debug!(error = %err, "Pizza rejected");
            err.into_response()
        }
    }
}
