//! Transport Error Taxonomy
//!
//! Tagged error kinds produced at the fetch boundary, with one exhaustive
//! mapping to user-facing banner text. Raw detail (stack traces, paths,
//! ORM error shapes) never reaches the banner; callers log it to the
//! console instead.

use thiserror::Error;

/// Everything that can go wrong between issuing a request and holding a
/// usable record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Backend answered 404 for the operation reference.
    #[error("checklist not found")]
    NotFound,
    /// Body could not be parsed as JSON.
    #[error("invalid response format")]
    InvalidResponse,
    /// 2xx response carrying no record.
    #[error("no data received")]
    NoData,
    /// Non-2xx response, with the backend's `error`/`message` text if any.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never completed (connection refused, DNS, aborted).
    #[error("network failure: {0}")]
    Network(String),
}

pub const MSG_NOT_FOUND: &str =
    "Checklist not found. Please verify the operation reference number.";
pub const MSG_INVALID_RESPONSE: &str =
    "Received an unexpected response from the server. Please try again.";
pub const MSG_NO_DATA: &str = "No data received from the server. Please try again.";
pub const MSG_SERVER_ERROR: &str = "Server error occurred. Please try again later.";
pub const MSG_UNAVAILABLE: &str =
    "The service is temporarily unavailable. Please try again later.";
pub const MSG_NETWORK: &str =
    "Unable to connect to the server. Please check your network connection.";
pub const MSG_TIMEOUT: &str = "The request timed out. Please try again.";
pub const MSG_BACKEND_UNREACHABLE: &str =
    "The backend service is unreachable. Please try again later.";
pub const MSG_BAD_REFERENCE: &str = "Invalid operation reference number.";

impl FetchError {
    /// Map to the message rendered in the form banner.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::NotFound => MSG_NOT_FOUND.to_string(),
            FetchError::InvalidResponse => MSG_INVALID_RESPONSE.to_string(),
            FetchError::NoData => MSG_NO_DATA.to_string(),
            FetchError::Status { status, message: None } => {
                format!("Server error occurred (HTTP {status}). Please try again later.")
            }
            FetchError::Status { message: Some(message), .. } => normalize_message(message),
            FetchError::Network(detail) => normalize_message(detail),
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Substring heuristics over free-text backend and browser error messages,
/// checked in a fixed order.
pub fn normalize_message(raw: &str) -> String {
    let lower = raw.to_lowercase();

    if contains_any(
        &lower,
        &[
            "failed to fetch",
            "networkerror",
            "network error",
            "connection refused",
            "connection reset",
            "load failed",
        ],
    ) {
        return MSG_NETWORK.to_string();
    }
    if contains_any(&lower, &["timeout", "timed out"]) {
        return MSG_TIMEOUT.to_string();
    }
    if contains_any(&lower, &["not found", "404"]) {
        return MSG_NOT_FOUND.to_string();
    }
    if contains_any(&lower, &["internal server error", "500"]) {
        return MSG_SERVER_ERROR.to_string();
    }
    if contains_any(&lower, &["bad gateway", "service unavailable", "502", "503"]) {
        return MSG_UNAVAILABLE.to_string();
    }
    if contains_any(&lower, &["econnrefused", "socket hang up", "upstream", "unreachable"]) {
        return MSG_BACKEND_UNREACHABLE.to_string();
    }
    if contains_any(
        &lower,
        &["unexpected token", "json.parse", "invalid json", "unexpected end of json"],
    ) {
        return MSG_INVALID_RESPONSE.to_string();
    }
    if contains_any(&lower, &["cast to objectid", "objectid failed", "casterror"]) {
        return MSG_BAD_REFERENCE.to_string();
    }
    if is_validation_shaped(raw, &lower) {
        return raw.to_string();
    }
    if looks_internal(raw) {
        return MSG_SERVER_ERROR.to_string();
    }
    raw.to_string()
}

/// Short, clearly user-addressable validation messages pass through verbatim.
fn is_validation_shaped(raw: &str, lower: &str) -> bool {
    raw.len() <= 80 && contains_any(lower, &["required", "invalid", "must", "missing"])
}

/// Stack traces, source paths and over-long messages get collapsed.
fn looks_internal(raw: &str) -> bool {
    raw.len() > 160
        || contains_any(
            raw,
            &[" at /", "stack", ".js:", ".js)", ".ts:", ".rs:", "Exception", "Traceback"],
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_is_exact() {
        assert_eq!(
            FetchError::NotFound.user_message(),
            "Checklist not found. Please verify the operation reference number."
        );
    }

    #[test]
    fn test_status_without_message_names_the_code() {
        let err = FetchError::Status { status: 503, message: None };
        assert_eq!(
            err.user_message(),
            "Server error occurred (HTTP 503). Please try again later."
        );
    }

    #[test]
    fn test_internal_looking_message_is_collapsed() {
        let err = FetchError::Status {
            status: 500,
            message: Some("Internal failure in validator at /app/src/x.js".to_string()),
        };
        assert_eq!(err.user_message(), MSG_SERVER_ERROR);
    }

    #[test]
    fn test_long_message_is_collapsed() {
        let raw = "x".repeat(200);
        assert_eq!(normalize_message(&raw), MSG_SERVER_ERROR);
    }

    #[test]
    fn test_short_validation_message_passes_through() {
        let raw = "Operation reference number is required";
        assert_eq!(normalize_message(raw), raw);
        let raw = "Invalid cargo quantity";
        assert_eq!(normalize_message(raw), raw);
    }

    #[test]
    fn test_network_beats_timeout_in_order() {
        // Both phrases present; network phrasing is checked first.
        let raw = "connection refused while waiting for timeout";
        assert_eq!(normalize_message(raw), MSG_NETWORK);
        assert_eq!(normalize_message("request timed out"), MSG_TIMEOUT);
    }

    #[test]
    fn test_browser_fetch_failures() {
        assert_eq!(normalize_message("Failed to fetch"), MSG_NETWORK);
        assert_eq!(normalize_message("NetworkError when attempting to fetch resource."), MSG_NETWORK);
    }

    #[test]
    fn test_gateway_and_unreachable_phrases() {
        assert_eq!(normalize_message("502 Bad Gateway"), MSG_UNAVAILABLE);
        assert_eq!(normalize_message("connect ECONNREFUSED 10.0.0.7:8080"), MSG_BACKEND_UNREACHABLE);
    }

    #[test]
    fn test_orm_cast_errors_become_bad_reference() {
        assert_eq!(
            normalize_message("Cast to ObjectId failed for value \"abc\""),
            MSG_BAD_REFERENCE
        );
    }

    #[test]
    fn test_json_parse_phrases() {
        assert_eq!(
            normalize_message("Unexpected token < in JSON at position 0"),
            MSG_INVALID_RESPONSE
        );
    }

    #[test]
    fn test_plain_short_message_passes_through() {
        assert_eq!(normalize_message("Checklist already finalized"), "Checklist already finalized");
    }
}
