//! Unified error handling
//!
//! [`AppError`] is the HTTP-facing error type. Every variant maps to a
//! status code and serializes as `{"error": "<kind>", "message": "..."}`.
//!
//! | Variant | Status |
//! |---------|--------|
//! | NotFound | 404 |
//! | AlreadyExists | 400 |
//! | BusinessRule | 400 |
//! | Validation | 400 |
//! | Database / Internal | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Entity lookup miss, by id or by CPF (404)
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation on create (400)
    #[error("{0}")]
    AlreadyExists(String),

    /// Business rule rejected the state transition (400)
    #[error("{0}")]
    BusinessRule(String),

    /// Malformed request payload (400)
    #[error("{0}")]
    Validation(String),

    /// Database failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else (500)
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::AlreadyExists(msg) => {
                (StatusCode::BAD_REQUEST, "already_exists", msg.clone())
            }
            AppError::BusinessRule(msg) => (StatusCode::BAD_REQUEST, "business_rule", msg.clone()),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            AppError::Database(msg) => {
                // Log the detail, return a generic message
                tracing::error!(error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: kind.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::AlreadyExists(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
            rule @ (RepoError::SalaryBelowRoleMinimum { .. }
            | RepoError::ProfitShareAboveCap { .. }
            | RepoError::ProfitShareBelowZero) => AppError::BusinessRule(rule.to_string()),
        }
    }
}

// ========== Helper constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}
