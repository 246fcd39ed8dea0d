//! Transactions API endpoints - JSON
//!
//! Endpoints:
//! - api_transactions: Filterable transaction list
//! - api_transaction_detail: Single transaction
//! - api_transaction_create: Validate a draft and store it
//! - api_transaction_update: Replace an existing transaction
//! - api_transaction_delete: Remove a transaction
//! - api_transaction_set_status: Mark paid or revert
//! - api_receivables: Open membership dues

use crate::error::ApiError;
use crate::AppState;
use axum::extract::Query;
use chrono::{NaiveDate, Utc};
use gymdesk_core::{
    CategorySelector, Transaction, TransactionDraft, TransactionFilter, TransactionStatus,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Serialize)]
struct TransactionsResponse {
    transactions: Vec<Transaction>,
    total_count: usize,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|_| ApiError::InternalError)
}

fn bad_param(name: &str, value: &str) -> ApiError {
    ApiError::BadRequest {
        message: format!("Invalid value for '{}': {}", name, value),
    }
}

fn parse_date(params: &HashMap<String, String>, name: &str) -> Result<Option<NaiveDate>, ApiError> {
    match params.get(name) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| bad_param(name, raw)),
        None => Ok(None),
    }
}

fn parse_amount(
    params: &HashMap<String, String>,
    name: &str,
) -> Result<Option<Decimal>, ApiError> {
    match params.get(name) {
        Some(raw) => Decimal::from_str(raw)
            .map(Some)
            .map_err(|_| bad_param(name, raw)),
        None => Ok(None),
    }
}

/// Build a filter from the request's query parameters
fn filter_from_params(params: &HashMap<String, String>) -> Result<TransactionFilter, ApiError> {
    let mut filter = TransactionFilter::default();

    if let Some(raw) = params.get("type") {
        filter.kind = Some(raw.parse().map_err(|_| bad_param("type", raw))?);
    }
    if let Some(raw) = params.get("status") {
        filter.status = Some(raw.parse().map_err(|_| bad_param("status", raw))?);
    }
    filter.date_from = parse_date(params, "date_from")?;
    filter.date_to = parse_date(params, "date_to")?;
    if let Some(raw) = params.get("category") {
        filter.category = CategorySelector::parse(raw).map_err(|_| bad_param("category", raw))?;
    }
    filter.amount_min = parse_amount(params, "amount_min")?;
    filter.amount_max = parse_amount(params, "amount_max")?;
    filter.search = params.get("q").cloned();

    Ok(filter)
}

/// Get transactions with filtering (JSON API)
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let filter = filter_from_params(&params)?;
    let book = state.book.read().await;
    let transactions = book.filtered(&filter);

    to_json(&TransactionsResponse {
        total_count: transactions.len(),
        transactions,
    })
}

/// Get single transaction detail (JSON API)
pub async fn api_transaction_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<u64>,
) -> Result<String, ApiError> {
    let book = state.book.read().await;
    let tx = book
        .get(path.0)
        .ok_or(gymdesk_core::CoreError::TransactionNotFound { id: path.0 })?;
    to_json(tx)
}

#[derive(Serialize)]
struct CreatedResponse {
    id: u64,
}

/// Create a transaction from a draft (JSON API)
pub async fn api_transaction_create(
    state: axum::extract::State<AppState>,
    axum::Json(draft): axum::Json<TransactionDraft>,
) -> Result<String, ApiError> {
    let mut book = state.book.write().await;
    let id = book.insert(draft)?;
    to_json(&CreatedResponse { id })
}

/// Replace an existing transaction (JSON API)
pub async fn api_transaction_update(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<u64>,
    axum::Json(draft): axum::Json<TransactionDraft>,
) -> Result<String, ApiError> {
    let tx = draft.validate()?;
    let mut book = state.book.write().await;
    book.update(path.0, tx)?;
    let stored = book
        .get(path.0)
        .ok_or(gymdesk_core::CoreError::TransactionNotFound { id: path.0 })?;
    to_json(stored)
}

/// Delete a transaction (JSON API)
pub async fn api_transaction_delete(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<u64>,
) -> Result<String, ApiError> {
    let mut book = state.book.write().await;
    book.remove(path.0)?;
    Ok(r#"{"deleted": true}"#.to_string())
}

#[derive(Deserialize)]
pub struct StatusChange {
    pub status: TransactionStatus,
}

/// Change a transaction's status (JSON API)
///
/// Marking paid records today's date as the payment date.
pub async fn api_transaction_set_status(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<u64>,
    axum::Json(change): axum::Json<StatusChange>,
) -> Result<String, ApiError> {
    let today = Utc::now().date_naive();
    let mut book = state.book.write().await;
    book.set_status(path.0, change.status, today)?;
    let stored = book
        .get(path.0)
        .ok_or(gymdesk_core::CoreError::TransactionNotFound { id: path.0 })?;
    to_json(stored)
}

/// Open membership dues (JSON API)
pub async fn api_receivables(
    state: axum::extract::State<AppState>,
) -> Result<String, ApiError> {
    let book = state.book.read().await;
    let transactions = book.receivables(state.config.billing.dues_category);
    to_json(&TransactionsResponse {
        total_count: transactions.len(),
        transactions,
    })
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use gymdesk_core::TransactionType;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_filter_from_params_full() {
        let filter = filter_from_params(&params(&[
            ("type", "income"),
            ("status", "pending"),
            ("date_from", "2023-10-01"),
            ("date_to", "2023-10-31"),
            ("category", "1"),
            ("amount_min", "100.00"),
            ("amount_max", "500.00"),
            ("q", "mensalidade"),
        ]))
        .unwrap();

        assert_eq!(filter.kind, Some(TransactionType::Income));
        assert_eq!(filter.status, Some(TransactionStatus::Pending));
        assert_eq!(filter.category, CategorySelector::Id(1));
        assert_eq!(filter.amount_min, Some(Decimal::new(10000, 2)));
        assert_eq!(filter.search.as_deref(), Some("mensalidade"));
    }

    #[test]
    fn test_filter_from_params_empty_matches_all() {
        let filter = filter_from_params(&params(&[])).unwrap();
        assert!(filter.kind.is_none());
        assert_eq!(filter.category, CategorySelector::All);
    }

    #[test]
    fn test_filter_from_params_rejects_bad_values() {
        assert!(filter_from_params(&params(&[("type", "transfer")])).is_err());
        assert!(filter_from_params(&params(&[("date_from", "10/01/2023")])).is_err());
        assert!(filter_from_params(&params(&[("amount_min", "abc")])).is_err());
        assert!(filter_from_params(&params(&[("category", "dues")])).is_err());
    }
}
