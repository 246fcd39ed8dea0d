//! Reports API endpoints - JSON
//!
//! Endpoints:
//! - api_income_expense: Paid income/expense per month for a year
//! - api_delinquency: Outstanding income summary
//! - api_delinquency_detailed: Per-member rollup with contact data

use crate::error::ApiError;
use crate::AppState;
use axum::extract::Query;
use chrono::{Datelike, Utc};
use gymdesk_core::{
    debtor_rollups, delinquency_summary, filter_rollups, monthly_totals, rollup_summary,
};
use gymdesk_utils::format_brl;
use serde::Serialize;
use std::collections::HashMap;

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|_| ApiError::InternalError)
}

#[derive(Serialize)]
struct IncomeExpenseResponse {
    #[serde(flatten)]
    totals: gymdesk_core::MonthlyTotals,
    total_income: rust_decimal::Decimal,
    total_expense: rust_decimal::Decimal,
    net: rust_decimal::Decimal,
    net_display: String,
}

/// Monthly income/expense report (JSON API)
///
/// `year` defaults to the current year.
pub async fn api_income_expense(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let year = match params.get("year") {
        Some(raw) => raw.parse::<i32>().map_err(|_| ApiError::BadRequest {
            message: format!("Invalid value for 'year': {}", raw),
        })?,
        None => Utc::now().date_naive().year(),
    };

    let book = state.book.read().await;
    let totals = monthly_totals(book.transactions(), year);

    to_json(&IncomeExpenseResponse {
        total_income: totals.total_income(),
        total_expense: totals.total_expense(),
        net: totals.net(),
        net_display: format_brl(totals.net()),
        totals,
    })
}

/// Delinquency summary report (JSON API)
pub async fn api_delinquency(
    state: axum::extract::State<AppState>,
) -> Result<String, ApiError> {
    let book = state.book.read().await;
    let summary = delinquency_summary(book.transactions());
    to_json(&summary)
}

#[derive(Serialize)]
struct DetailedDelinquencyResponse {
    summary: gymdesk_core::RollupSummary,
    debtors: Vec<gymdesk_core::DebtorRollup>,
}

/// Detailed delinquency report (JSON API)
///
/// Optional `q` narrows debtors by name, email, or phone.
pub async fn api_delinquency_detailed(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let today = Utc::now().date_naive();
    let book = state.book.read().await;

    let rollups = debtor_rollups(
        book.transactions(),
        state.roster.as_ref(),
        state.config.billing.dues_category,
        today,
    );
    let debtors = match params.get("q") {
        Some(term) => filter_rollups(rollups, term),
        None => rollups,
    };

    to_json(&DetailedDelinquencyResponse {
        summary: rollup_summary(&debtors),
        debtors,
    })
}
