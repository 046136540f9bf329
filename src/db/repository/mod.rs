//! Repository module
//!
//! CRUD operations and the business-rule checks that guard them, as free
//! functions over the SQLite pool.

pub mod employee;

use thiserror::Error;

use crate::db::models::Role;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Role {role} incompatible with employee's salary, raise salary to at least {minimum} first")]
    SalaryBelowRoleMinimum { role: Role, minimum: f64 },

    #[error("Profit share exceeds maximum value allowed (max = {cap})")]
    ProfitShareAboveCap { cap: f64 },

    #[error("Profit share final value is lesser than zero")]
    ProfitShareBelowZero,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
