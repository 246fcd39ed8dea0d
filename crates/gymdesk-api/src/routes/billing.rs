//! Billing API endpoints - JSON
//!
//! Endpoints:
//! - api_generate_dues: Create one pending dues row per roster member

use crate::error::ApiError;
use crate::AppState;
use gymdesk_config::DuplicatePolicy;
use gymdesk_core::{generate_dues, BillingPeriod, GenerateOptions};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub month: u32,
    pub year: i32,
    /// Overrides the configured duplicate policy for this run
    pub on_duplicate: Option<DuplicatePolicy>,
}

#[derive(Serialize)]
struct GenerateResponse {
    period: String,
    generated: usize,
    skipped: usize,
    ids: Vec<u64>,
}

/// Generate monthly dues for every roster member (JSON API)
pub async fn api_generate_dues(
    state: axum::extract::State<AppState>,
    axum::Json(request): axum::Json<GenerateRequest>,
) -> Result<String, ApiError> {
    let period = BillingPeriod::new(request.month, request.year)?;

    let billing = &state.config.billing;
    let opts = GenerateOptions {
        dues_category: billing.dues_category,
        due_day: billing.due_day,
        unit_amount: billing.unit_amount,
        on_duplicate: request.on_duplicate.unwrap_or(billing.on_duplicate),
    };

    let mut book = state.book.write().await;
    let outcome = generate_dues(&mut book, state.roster.as_ref(), period, &opts)?;

    serde_json::to_string(&GenerateResponse {
        period: period.label(),
        generated: outcome.generated.len(),
        skipped: outcome.skipped.len(),
        ids: outcome.generated,
    })
    .map_err(|_| ApiError::InternalError)
}
