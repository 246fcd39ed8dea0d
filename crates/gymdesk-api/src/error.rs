//! Error types for gymdesk-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gymdesk_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Internal server error")]
    InternalError,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Core(err) => match err {
                CoreError::TransactionNotFound { .. } => StatusCode::NOT_FOUND,
                CoreError::ValidationError { .. } | CoreError::UnknownCategory { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                CoreError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
                CoreError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> String {
        let payload = match self {
            ApiError::Core(err) => serde_json::json!({ "error": err.to_details() }),
            other => serde_json::json!({ "error": { "message": other.to_string() } }),
        };
        payload.to_string()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Core(ref err) = self {
            log::warn!("request failed [{}]: {}", err.code(), err);
        }
        let mut response = (self.status(), self.body()).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/json"),
        );
        response
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError::Core(CoreError::TransactionNotFound { id: 9 });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::Core(CoreError::ValidationError {
            field: "amount".to_string(),
            message: "must be positive".to_string(),
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = ApiError::BadRequest {
            message: "bad year".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_core_error_body_carries_code() {
        let err = ApiError::Core(CoreError::TransactionNotFound { id: 9 });
        let body = err.body();
        assert!(body.contains("TRANSACTION_NOT_FOUND"));
    }
}
