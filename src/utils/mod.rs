//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResult`] - HTTP-facing error handling
//! - [`logger`] - tracing setup
//! - [`validation`] - request payload checks
//! - [`money`] - decimal-backed monetary arithmetic
//! - [`ids`] - resource id generation

pub mod error;
pub mod ids;
pub mod logger;
pub mod money;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
