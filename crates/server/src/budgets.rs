//! Budgets API endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use store::{Budget, BudgetPatch, NewBudget};

use crate::{ServerError, server::ServerState};

#[derive(Debug, Deserialize)]
pub struct BudgetListQuery {
    /// Optional `YYYY-MM` filter, matched exactly.
    month: Option<String>,
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<BudgetListQuery>,
) -> Result<Json<Vec<Budget>>, ServerError> {
    let budgets = match query.month {
        Some(month) => state.storage.budgets_by_month(&month).await?,
        None => state.storage.budgets().await?,
    };
    Ok(Json(budgets))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<NewBudget>,
) -> Result<(StatusCode, Json<Budget>), ServerError> {
    let budget = state.storage.create_budget(payload).await?;
    Ok((StatusCode::CREATED, Json(budget)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<BudgetPatch>,
) -> Result<Json<Budget>, ServerError> {
    match state.storage.update_budget(&id, patch).await? {
        Some(budget) => Ok(Json(budget)),
        None => Err(ServerError::NotFound("budget")),
    }
}
