//! Tolerant JSON Field Extraction
//!
//! Draft reconciliation works field by field: a missing key, a null, or a
//! value of the wrong type all fall back to the caller's default, so a
//! rebuilt record is always fully populated.

use serde_json::Value;

static NULL: Value = Value::Null;

pub fn str_or(value: &Value, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

pub fn bool_or(value: &Value, key: &str, default: bool) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(default)
}

pub fn f64_or(value: &Value, key: &str, default: f64) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(default)
}

/// Nested object under `key`, or `Null` so further lookups keep defaulting.
pub fn obj<'a>(value: &'a Value, key: &str) -> &'a Value {
    value.get(key).unwrap_or(&NULL)
}

/// Array under `key`, or an empty slice.
pub fn arr<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
