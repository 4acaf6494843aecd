use axum::{
    Router,
    routing::{get, put},
};
use store::DynStorage;

use crate::{analytics, budgets, categories, goals, transactions};

#[derive(Clone)]
pub struct ServerState {
    pub storage: DynStorage,
    /// Whether a durable backend was asked for at startup. The category
    /// list degrades to a fixed fallback instead of erroring when this
    /// is set.
    pub durable_configured: bool,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/api/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/api/transactions/{id}",
            put(transactions::update).delete(transactions::remove),
        )
        .route(
            "/api/categories",
            get(categories::list).post(categories::create),
        )
        .route("/api/budgets", get(budgets::list).post(budgets::create))
        .route("/api/budgets/{id}", put(budgets::update))
        .route("/api/goals", get(goals::list).post(goals::create))
        .route(
            "/api/goals/{id}",
            put(goals::update).delete(goals::remove),
        )
        .route("/api/tax-calculation", get(analytics::tax_calculation))
        .route("/api/analytics/summary", get(analytics::summary))
        .route("/api/analytics/trends", get(analytics::trends))
        .route("/api/analytics/categories", get(analytics::categories))
        .with_state(state)
}

pub async fn run_with_listener(
    storage: DynStorage,
    durable_configured: bool,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        storage,
        durable_configured,
    };

    axum::serve(listener, router(state)).await
}
