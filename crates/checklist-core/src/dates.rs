//! Date Normalization
//!
//! Backends have been observed returning full timestamps, slash-separated
//! dates and plain empty strings for the same field. Everything is coerced
//! to `YYYY-MM-DD`, or to an empty string when no date can be recovered.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

const INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Coerce date-like input to `YYYY-MM-DD`, or an empty string.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.date_naive().format("%Y-%m-%d").to_string();
    }
    for format in INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    String::new()
}

/// Outbound representation: empty dates are transmitted as `null`,
/// never as an empty string.
pub fn date_to_json(raw: &str) -> Value {
    let normalized = normalize_date(raw);
    if normalized.is_empty() {
        Value::Null
    } else {
        Value::String(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_iso_date_passthrough() {
        assert_eq!(normalize_date("2024-03-01"), "2024-03-01");
    }

    #[test]
    fn test_normalize_rfc3339_timestamp() {
        assert_eq!(normalize_date("2024-03-01T08:30:00Z"), "2024-03-01");
        assert_eq!(normalize_date("2024-03-01T23:59:59+05:00"), "2024-03-01");
    }

    #[test]
    fn test_normalize_slash_formats() {
        assert_eq!(normalize_date("2024/03/01"), "2024-03-01");
        assert_eq!(normalize_date("01/03/2024"), "2024-03-01");
    }

    #[test]
    fn test_normalize_garbage_is_empty() {
        assert_eq!(normalize_date("not a date"), "");
        assert_eq!(normalize_date("2024-13-45"), "");
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("   "), "");
    }

    #[test]
    fn test_date_to_json_empty_is_null() {
        assert_eq!(date_to_json(""), Value::Null);
        assert_eq!(date_to_json("junk"), Value::Null);
        assert_eq!(date_to_json("2024-03-01"), Value::String("2024-03-01".into()));
    }
}
