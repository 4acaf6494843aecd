//! HTTP boundary over the store.
//!
//! Handlers validate payloads, call the injected [`store::Storage`]
//! backend, and serialize its records straight to JSON. Absence from the
//! store becomes 404, payload problems become 400 before the store is
//! ever called, and backend failures become 500 with the detail logged
//! rather than leaked.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use store::StoreError;

pub use server::{ServerState, router, run_with_listener};

mod analytics;
mod budgets;
mod categories;
mod goals;
mod server;
mod transactions;

pub enum ServerError {
    /// The addressed record does not exist; carries the entity noun.
    NotFound(&'static str),
    /// The payload was well-formed JSON but semantically invalid.
    Validation(String),
    Store(StoreError),
}

#[derive(Serialize)]
struct Error {
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::NotFound(entity) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            ServerError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ServerError::Store(err) => {
                tracing::error!("store error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(Error { message })).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let res = ServerError::NotFound("transaction").into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let res = ServerError::Validation("amount must not be negative".to_string())
            .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_error_maps_to_500() {
        let res = ServerError::from(StoreError::Corrupt("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
