//! Categories API endpoints.

use axum::{Json, extract::State, http::StatusCode};
use store::{Category, NewCategory, TransactionKind};

use crate::{ServerError, server::ServerState};

/// Minimal category set served when the durable backend is configured
/// but unreachable, so the UI never renders an empty picker.
fn fallback_categories() -> Vec<Category> {
    fn entry(id: &str, name: &str, kind: TransactionKind, icon: &str, color: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    vec![
        entry(
            "1",
            "อาหาร",
            TransactionKind::Expense,
            "fas fa-utensils",
            "hsl(var(--chart-1))",
        ),
        entry(
            "2",
            "การเดินทาง",
            TransactionKind::Expense,
            "fas fa-car",
            "hsl(var(--chart-2))",
        ),
        entry(
            "3",
            "เงินเดือน",
            TransactionKind::Income,
            "fas fa-briefcase",
            "hsl(var(--success))",
        ),
    ]
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Category>>, ServerError> {
    match state.storage.categories().await {
        Ok(categories) => Ok(Json(categories)),
        Err(err) if state.durable_configured => {
            tracing::error!("category list failed, serving fallback set: {err}");
            Ok(Json(fallback_categories()))
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<NewCategory>,
) -> Result<(StatusCode, Json<Category>), ServerError> {
    let category = state.storage.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
