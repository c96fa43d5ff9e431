//! Backend Response Classification
//!
//! Pure classification of a completed HTTP exchange into a record value or
//! a [`FetchError`] kind, shared by the draft loader and the submission
//! client.

use serde_json::Value;

use crate::error::FetchError;

/// Raw transport response, already read to completion.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    /// Relayed for console diagnostics; the body is parsed best-effort
    /// regardless of what the backend claims.
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn parse_body(resp: &RawResponse) -> Result<Value, FetchError> {
    serde_json::from_str(&resp.body).map_err(|_| FetchError::InvalidResponse)
}

fn body_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .map(str::to_string)
}

fn record_is_empty(record: &Value) -> bool {
    match record {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => true,
    }
}

/// Classify a draft-fetch response.
///
/// The record is accepted either wrapped under `data` or as the top-level
/// body; a 2xx body carrying `success: false` counts as a backend-reported
/// error.
pub fn parse_draft_response(resp: &RawResponse) -> Result<Value, FetchError> {
    if resp.status == 404 {
        return Err(FetchError::NotFound);
    }
    if resp.is_success() && resp.body.trim().is_empty() {
        return Err(FetchError::NoData);
    }
    let body = parse_body(resp)?;
    if !resp.is_success() {
        return Err(FetchError::Status {
            status: resp.status,
            message: body_message(&body),
        });
    }
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(FetchError::Status {
            status: resp.status,
            message: body_message(&body),
        });
    }
    let record = match body.get("data") {
        Some(data) if data.is_object() => data.clone(),
        _ => body,
    };
    if record_is_empty(&record) {
        return Err(FetchError::NoData);
    }
    Ok(record)
}

/// Classify a submission response. The body is only consulted for errors;
/// an empty 2xx body is a success.
pub fn parse_submit_response(resp: &RawResponse) -> Result<(), FetchError> {
    if resp.status == 404 {
        return Err(FetchError::NotFound);
    }
    if !resp.is_success() {
        let body = parse_body(resp)?;
        return Err(FetchError::Status {
            status: resp.status,
            message: body_message(&body),
        });
    }
    if let Ok(body) = serde_json::from_str::<Value>(&resp.body) {
        if body.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(FetchError::Status {
                status: resp.status,
                message: body_message(&body),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_404_is_not_found() {
        let err = parse_draft_response(&response(404, "{}")).unwrap_err();
        assert_eq!(err, FetchError::NotFound);
    }

    #[test]
    fn test_unparsable_body_is_invalid_response() {
        let resp = RawResponse {
            status: 500,
            content_type: Some("text/html".to_string()),
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(parse_draft_response(&resp).unwrap_err(), FetchError::InvalidResponse);
    }

    #[test]
    fn test_error_status_picks_up_body_message() {
        let err = parse_draft_response(&response(500, r#"{"message":"boom"}"#)).unwrap_err();
        assert_eq!(
            err,
            FetchError::Status { status: 500, message: Some("boom".to_string()) }
        );
        // `error` takes precedence over `message`.
        let err =
            parse_draft_response(&response(422, r#"{"error":"nope","message":"boom"}"#)).unwrap_err();
        assert_eq!(
            err,
            FetchError::Status { status: 422, message: Some("nope".to_string()) }
        );
    }

    #[test]
    fn test_error_status_without_message() {
        let err = parse_draft_response(&response(500, "{}")).unwrap_err();
        assert_eq!(err, FetchError::Status { status: 500, message: None });
    }

    #[test]
    fn test_empty_success_body_is_no_data() {
        assert_eq!(parse_draft_response(&response(200, "")).unwrap_err(), FetchError::NoData);
        assert_eq!(parse_draft_response(&response(200, "{}")).unwrap_err(), FetchError::NoData);
        assert_eq!(
            parse_draft_response(&response(200, r#"{"data":null}"#)).unwrap_err(),
            FetchError::NoData
        );
    }

    #[test]
    fn test_record_wrapped_in_data() {
        let record = parse_draft_response(&response(200, r#"{"data":{"operationRef":"X-1"}}"#))
            .expect("record");
        assert_eq!(record, json!({ "operationRef": "X-1" }));
    }

    #[test]
    fn test_record_at_top_level() {
        let record =
            parse_draft_response(&response(200, r#"{"operationRef":"X-1"}"#)).expect("record");
        assert_eq!(record, json!({ "operationRef": "X-1" }));
    }

    #[test]
    fn test_success_false_is_backend_error() {
        let err = parse_draft_response(&response(200, r#"{"success":false,"message":"rejected"}"#))
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::Status { status: 200, message: Some("rejected".to_string()) }
        );
    }

    #[test]
    fn test_submit_tolerates_empty_body() {
        assert!(parse_submit_response(&response(200, "")).is_ok());
        assert!(parse_submit_response(&response(201, r#"{"success":true}"#)).is_ok());
    }

    #[test]
    fn test_submit_failures_mirror_draft_rules() {
        assert_eq!(
            parse_submit_response(&response(404, "{}")).unwrap_err(),
            FetchError::NotFound
        );
        assert_eq!(
            parse_submit_response(&response(500, r#"{"error":"boom"}"#)).unwrap_err(),
            FetchError::Status { status: 500, message: Some("boom".to_string()) }
        );
        assert_eq!(
            parse_submit_response(&response(200, r#"{"success":false,"error":"dup"}"#)).unwrap_err(),
            FetchError::Status { status: 200, message: Some("dup".to_string()) }
        );
    }
}
