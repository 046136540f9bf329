//! Monetary arithmetic using rust_decimal for precision
//!
//! Salary and profit share values are stored and serialized as `f64`, but
//! every adjustment is computed in `Decimal` and rounded to 2 decimal
//! places before persisting.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// `a + b`, computed in decimal space.
pub fn add(a: f64, b: f64) -> f64 {
    apply(a, b, |x, y| x + y, a + b)
}

/// `a - b`, computed in decimal space.
pub fn sub(a: f64, b: f64) -> f64 {
    apply(a, b, |x, y| x - y, a - b)
}

fn apply(a: f64, b: f64, op: impl Fn(Decimal, Decimal) -> Decimal, fallback: f64) -> f64 {
    match (Decimal::from_f64(a), Decimal::from_f64(b)) {
        (Some(x), Some(y)) => op(x, y)
            .round_dp(DECIMAL_PLACES)
            .to_f64()
            .unwrap_or(fallback),
        // Values outside Decimal's range fall back to float math
        _ => fallback,
    }
}
