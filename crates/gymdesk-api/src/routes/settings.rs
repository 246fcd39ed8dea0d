//! Settings API endpoints - JSON

use crate::error::ApiError;
use crate::AppState;

/// Current configuration (JSON API)
pub async fn api_settings(state: axum::extract::State<AppState>) -> Result<String, ApiError> {
    serde_json::to_string(&state.config).map_err(|_| ApiError::InternalError)
}
