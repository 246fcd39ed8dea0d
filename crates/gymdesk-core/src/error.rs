//! Error types for gymdesk-core
//!
//! This module provides error handling for the financial core,
//! including error codes, detailed messages, and suggestions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Transaction not found
    TransactionNotFound,
    /// Validation error
    ValidationError,
    /// Unknown category
    UnknownCategory,
    /// Invalid date
    InvalidDate,
    /// Internal error
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::TransactionNotFound => write!(f, "TRANSACTION_NOT_FOUND"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::UnknownCategory => write!(f, "UNKNOWN_CATEGORY"),
            ErrorCode::InvalidDate => write!(f, "INVALID_DATE"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Field path (for field-specific errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            field: None,
            suggestions: vec![],
        }
    }

    /// Add field information
    pub fn with_field(mut self, field: String) -> Self {
        self.field = Some(field);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref field) = self.field {
            write!(f, "\nField: {}", field)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - application may be unstable
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Main error type for gymdesk-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Transaction not found: {id}")]
    TransactionNotFound { id: u64 },

    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Unknown category {category} for {kind}")]
    UnknownCategory { category: u32, kind: String },

    #[error("Invalid date: {message}")]
    InvalidDate { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::TransactionNotFound { .. } => ErrorCode::TransactionNotFound,
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::UnknownCategory { .. } => ErrorCode::UnknownCategory,
            CoreError::InvalidDate { .. } => ErrorCode::InvalidDate,
            CoreError::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::TransactionNotFound { .. } => ErrorSeverity::Info,
            CoreError::ValidationError { .. } => ErrorSeverity::Warning,
            CoreError::UnknownCategory { .. } => ErrorSeverity::Warning,
            CoreError::InvalidDate { .. } => ErrorSeverity::Warning,
            CoreError::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::TransactionNotFound { .. } => {
                details = details
                    .with_suggestion("Check if the transaction ID is correct.".to_string());
                details = details.with_suggestion(
                    "Use the /api/transactions endpoint to list all transactions.".to_string(),
                );
            }
            CoreError::ValidationError { field, .. } => {
                details = details.with_field(field.clone());
            }
            CoreError::UnknownCategory { kind, .. } => {
                details = details.with_field("category".to_string());
                details = details.with_suggestion(format!(
                    "Check the {} category catalog for valid ids.",
                    kind
                ));
            }
            _ => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(
            ErrorCode::TransactionNotFound.to_string(),
            "TRANSACTION_NOT_FOUND"
        );
        assert_eq!(ErrorCode::ValidationError.to_string(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::UnknownCategory.to_string(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn test_error_severity() {
        let error = CoreError::TransactionNotFound { id: 42 };
        assert_eq!(error.severity(), ErrorSeverity::Info);

        let error = CoreError::ValidationError {
            field: "amount".to_string(),
            message: "must be positive".to_string(),
        };
        assert_eq!(error.severity(), ErrorSeverity::Warning);

        let error = CoreError::InternalError {
            message: "oops".to_string(),
        };
        assert_eq!(error.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_error_details_not_found() {
        let error = CoreError::TransactionNotFound { id: 7 };
        let details = error.to_details();

        assert_eq!(details.code, ErrorCode::TransactionNotFound);
        assert!(!details.suggestions.is_empty());
        assert!(details.message.contains('7'));
    }

    #[test]
    fn test_error_details_validation_field() {
        let error = CoreError::ValidationError {
            field: "due_date".to_string(),
            message: "is required".to_string(),
        };
        let details = error.to_details();

        assert_eq!(details.field.as_deref(), Some("due_date"));
    }
}
