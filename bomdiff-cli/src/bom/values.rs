//! Best-effort coercion of loosely typed API values
//!
//! SuiteQL returns most scalars as strings while REST Records returns numbers,
//! so every numeric field is read through these helpers.

use serde_json::Value;

/// Quantity as f64; null, non-numeric and non-finite values become 0.0
pub fn parse_quantity(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|q| q.is_finite()).unwrap_or(0.0)
}

/// Integer identifier from a number or a digit string
pub fn parse_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Non-empty string content, if any
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Display string for a scalar (strings unquoted, null as empty)
pub fn display_str(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
