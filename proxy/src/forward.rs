//! Request Forwarding
//!
//! Joins the configured backend base with the forwarded tail and relays
//! method, body and content-type in both directions.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Path, Request, State},
    http::header::CONTENT_TYPE,
    response::Response,
};
use tracing::{info, warn};

use crate::error::ProxyError;
use crate::state::AppState;

/// Forwarded bodies are multipart form submissions with inline base64
/// signatures; cap them well above any realistic checklist.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Join the backend base URL with the forwarded tail path and query.
pub fn target_url(base: &str, tail: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let tail = tail.trim_start_matches('/');
    match query {
        Some(query) if !query.is_empty() => format!("{base}/{tail}?{query}"),
        _ => format!("{base}/{tail}"),
    }
}

pub async fn forward_handler(
    State(state): State<Arc<AppState>>,
    Path(tail): Path<String>,
    request: Request,
) -> Result<Response, ProxyError> {
    let method = request.method().clone();
    let query = request.uri().query().map(str::to_string);
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|_| ProxyError::InvalidRequest)?;

    let url = target_url(&state.config.backend_base_url, &tail, query.as_deref());
    info!("{method} {url}");

    let upstream_method = reqwest::Method::from_bytes(method.as_str().as_bytes())
        .map_err(|_| ProxyError::InvalidRequest)?;
    let mut upstream = state.client.request(upstream_method, &url);
    if let Some(content_type) = &content_type {
        upstream = upstream.header(reqwest::header::CONTENT_TYPE, content_type);
    }
    if !body.is_empty() {
        upstream = upstream.body(body.to_vec());
    }

    let backend = upstream.send().await.map_err(|e| {
        warn!("backend request failed: {e}");
        ProxyError::Upstream(e)
    })?;

    let status = backend.status().as_u16();
    let backend_content_type = backend
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = backend.bytes().await?;

    let mut response = Response::builder().status(status);
    if let Some(content_type) = backend_content_type {
        response = response.header(CONTENT_TYPE, content_type);
    }
    response
        .body(Body::from(bytes.to_vec()))
        .map_err(|_| ProxyError::InvalidRequest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_url_joins_base_and_tail() {
        assert_eq!(
            target_url("http://localhost:4000/api/sts", "timesheet/create", None),
            "http://localhost:4000/api/sts/timesheet/create"
        );
    }

    #[test]
    fn test_target_url_normalizes_slashes() {
        assert_eq!(
            target_url("http://localhost:4000/api/sts/", "/timesheet", None),
            "http://localhost:4000/api/sts/timesheet"
        );
    }

    #[test]
    fn test_target_url_preserves_query() {
        assert_eq!(
            target_url(
                "http://localhost:4000/api/sts",
                "mooring-readiness",
                Some("operationRef=ABC-123"),
            ),
            "http://localhost:4000/api/sts/mooring-readiness?operationRef=ABC-123"
        );
        assert_eq!(
            target_url("http://b", "t", Some("")),
            "http://b/t"
        );
    }
}
