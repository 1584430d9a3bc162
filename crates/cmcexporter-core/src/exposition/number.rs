//! Numeric coercion and fixed-point formatting (panic-free).

use crate::error::{ExporterError, Result};
use crate::extract::is_placeholder;

/// Coerce a raw field into a float.
///
/// `""`, `"None"` and `"?"` mean "no value" and become `0.0`. Anything else
/// must parse; `metric` only labels the error.
pub fn parse_number(metric: &'static str, raw: &str) -> Result<f64> {
    if is_placeholder(raw) {
        return Ok(0.0);
    }
    raw.parse::<f64>().map_err(|_| ExporterError::InvalidNumber {
        metric,
        value: raw.to_string(),
    })
}

/// Fixed-point with exactly `precision` decimals.
pub fn format_value(v: f64, precision: usize) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf".into() } else { "-Inf".into() };
    }
    format!("{v:.precision$}")
}
