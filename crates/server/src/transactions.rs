//! Transactions API endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use store::{NewTransaction, Transaction, TransactionPatch};

use crate::{ServerError, server::ServerState};

fn check_amount(amount: Decimal) -> Result<(), ServerError> {
    if amount.is_sign_negative() {
        return Err(ServerError::Validation(
            "amount must not be negative".to_string(),
        ));
    }
    Ok(())
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Transaction>>, ServerError> {
    Ok(Json(state.storage.transactions().await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), ServerError> {
    check_amount(payload.amount)?;

    let transaction = state.storage.create_transaction(payload).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<TransactionPatch>,
) -> Result<Json<Transaction>, ServerError> {
    if let Some(amount) = patch.amount {
        check_amount(amount)?;
    }

    match state.storage.update_transaction(&id, patch).await? {
        Some(transaction) => Ok(Json(transaction)),
        None => Err(ServerError::NotFound("transaction")),
    }
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    if state.storage.delete_transaction(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::NotFound("transaction"))
    }
}
