//! Goals API endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use store::{Goal, GoalPatch, NewGoal};

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Goal>>, ServerError> {
    Ok(Json(state.storage.goals().await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<NewGoal>,
) -> Result<(StatusCode, Json<Goal>), ServerError> {
    let goal = state.storage.create_goal(payload).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<GoalPatch>,
) -> Result<Json<Goal>, ServerError> {
    match state.storage.update_goal(&id, patch).await? {
        Some(goal) => Ok(Json(goal)),
        None => Err(ServerError::NotFound("goal")),
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    if state.storage.delete_goal(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::NotFound("goal"))
    }
}
