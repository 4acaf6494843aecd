//! Analytics and tax API endpoints.
//!
//! These are thin wrappers: fetch the transaction snapshot, hand it to
//! the pure functions in [`store::reports`] / [`store::tax`], serialize
//! the result.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use store::reports::{self, CategorySlice, MonthlySummary, TrendPoint};
use store::tax::{self, TaxEstimate, TaxSchedule};

use crate::{ServerError, server::ServerState};

pub async fn summary(
    State(state): State<ServerState>,
) -> Result<Json<MonthlySummary>, ServerError> {
    let transactions = state.storage.transactions().await?;
    Ok(Json(reports::monthly_summary(
        &transactions,
        Utc::now().date_naive(),
    )))
}

pub async fn trends(
    State(state): State<ServerState>,
) -> Result<Json<Vec<TrendPoint>>, ServerError> {
    let transactions = state.storage.transactions().await?;
    Ok(Json(reports::trend_series(
        &transactions,
        Utc::now().date_naive(),
    )))
}

pub async fn categories(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CategorySlice>>, ServerError> {
    let transactions = state.storage.transactions().await?;
    Ok(Json(reports::category_breakdown(
        &transactions,
        Utc::now().date_naive(),
    )))
}

#[derive(Debug, Deserialize)]
pub struct TaxQuery {
    /// `YYYY-MM`; the estimate covers that month's containing year.
    month: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxReport {
    pub year: i32,
    pub annual_income: Decimal,
    #[serde(flatten)]
    pub estimate: TaxEstimate,
}

fn year_of_month(month: &str) -> Option<i32> {
    let first_day = format!("{month}-01");
    NaiveDate::parse_from_str(&first_day, "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

pub async fn tax_calculation(
    State(state): State<ServerState>,
    Query(query): Query<TaxQuery>,
) -> Result<Json<TaxReport>, ServerError> {
    let year = match &query.month {
        Some(month) => year_of_month(month).ok_or_else(|| {
            ServerError::Validation("invalid month, expected YYYY-MM".to_string())
        })?,
        None => Utc::now().date_naive().year(),
    };

    let transactions = state.storage.transactions().await?;
    let annual_income = tax::annual_income(&transactions, year);
    let estimate = tax::estimate(annual_income, &TaxSchedule::default());

    Ok(Json(TaxReport {
        year,
        annual_income,
        estimate,
    }))
}
