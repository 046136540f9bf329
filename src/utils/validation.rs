//! Request payload validation
//!
//! Field-level checks applied in handlers before any business rule runs.
//! Limits follow the employee record contract: short first name, longer
//! last name, 11-digit CPF, salary floor.

use crate::utils::AppError;

// ── Field limits ────────────────────────────────────────────────────

/// Minimum length for name and lastName
pub const MIN_NAME_LEN: usize = 3;

/// Maximum length for name
pub const MAX_NAME_LEN: usize = 10;

/// Maximum length for lastName
pub const MAX_LAST_NAME_LEN: usize = 60;

/// CPF is exactly 11 digits
pub const CPF_LEN: usize = 11;

/// Lowest salary accepted at creation, regardless of role
pub const MIN_SALARY: f64 = 1100.0;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a string length falls within `[min, max]`.
pub fn validate_text_range(
    value: &str,
    field: &str,
    min: usize,
    max: usize,
) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::validation(format!(
            "{field} must be between {min} and {max} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate that a CPF is exactly [`CPF_LEN`] ASCII digits.
pub fn validate_cpf(value: &str) -> Result<(), AppError> {
    if value.len() != CPF_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::validation(format!(
            "cpf must be exactly {CPF_LEN} digits, got '{value}'"
        )));
    }
    Ok(())
}

/// Validate the creation-time salary floor.
pub fn validate_min_salary(value: f64) -> Result<(), AppError> {
    if value < MIN_SALARY {
        return Err(AppError::validation(format!(
            "salary must be at least {MIN_SALARY}, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a number is finite (not NaN, not Infinity).
pub fn require_finite(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Ok(())
}
