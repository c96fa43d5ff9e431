//! Draft & Submission Routes
//!
//! The create/update distinction is carried by both the HTTP method and the
//! URL shape: POST to `<form-key>/create`, PUT to
//! `<form-key>?operationRef=<ref>`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::forms::FormKey;
use crate::opref::FormMode;

/// Query-string encoding that keeps `-`, `.` and `/`-free references
/// readable while escaping separators.
const QUERY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%')
    .add(b'?')
    .add(b'/');

pub fn encode_operation_ref(operation_ref: &str) -> String {
    utf8_percent_encode(operation_ref, QUERY_SET).to_string()
}

/// Path (relative to the proxy base) used to fetch an existing draft.
pub fn draft_path(key: FormKey, operation_ref: &str) -> String {
    format!("{}?operationRef={}", key.as_str(), encode_operation_ref(operation_ref))
}

/// HTTP method and path for a submission.
pub fn submission_route(key: FormKey, mode: FormMode, operation_ref: &str) -> (&'static str, String) {
    match mode {
        FormMode::Create => ("POST", format!("{}/create", key.as_str())),
        FormMode::Update => ("PUT", draft_path(key, operation_ref)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_plain_references_readable() {
        assert_eq!(encode_operation_ref("ABC-123"), "ABC-123");
        assert_eq!(encode_operation_ref("STS.2024.7"), "STS.2024.7");
    }

    #[test]
    fn test_encode_escapes_separators() {
        assert_eq!(encode_operation_ref("A B&C=D"), "A%20B%26C%3DD");
        assert_eq!(encode_operation_ref("STS/2024"), "STS%2F2024");
    }

    #[test]
    fn test_draft_path() {
        assert_eq!(
            draft_path(FormKey::MooringReadiness, "ABC-123"),
            "mooring-readiness?operationRef=ABC-123"
        );
    }

    #[test]
    fn test_submission_route_create() {
        let (method, path) = submission_route(FormKey::Timesheet, FormMode::Create, "ABC-123");
        assert_eq!(method, "POST");
        assert_eq!(path, "timesheet/create");
    }

    #[test]
    fn test_submission_route_update() {
        let (method, path) = submission_route(FormKey::ExpenseSheet, FormMode::Update, "AB 1");
        assert_eq!(method, "PUT");
        assert_eq!(path, "expense-sheet?operationRef=AB%201");
    }
}
