//! Backend Fetch Wrappers
//!
//! Frontend bindings from form operations to the same-origin proxy routes.
//! Every failure comes back as a [`FetchError`] kind; raw JS detail is
//! folded into `Network` for the console log.

use checklist_core::respond::{parse_draft_response, parse_submit_response, RawResponse};
use checklist_core::routes::{draft_path, submission_route};
use checklist_core::{FetchError, FormKey, FormMode};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

const PROXY_BASE: &str = "/api/sts-proxy/";

// ========================
// Transport
// ========================

fn js_error_text(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn network(err: JsValue) -> FetchError {
    FetchError::Network(js_error_text(err))
}

async fn run_fetch(request: &Request) -> Result<RawResponse, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(network)?;
    let response: Response = response.dyn_into().map_err(network)?;

    let status = response.status();
    let content_type = response.headers().get("content-type").ok().flatten();
    let body_promise = response.text().map_err(network)?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(network)?
        .as_string()
        .unwrap_or_default();

    Ok(RawResponse { status, content_type, body })
}

// ========================
// Draft Fetch
// ========================

/// Fetch an existing draft by operation reference.
pub async fn get_draft(key: FormKey, operation_ref: &str) -> Result<Value, FetchError> {
    let url = format!("{PROXY_BASE}{}", draft_path(key, operation_ref));
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(network)?;

    let raw = run_fetch(&request).await?;
    parse_draft_response(&raw)
}

// ========================
// Submission
// ========================

/// Submit a form payload. The JSON rides as the single `data` field of a
/// multipart body; the browser supplies the boundary, so no content-type
/// header is set here.
pub async fn submit(
    key: FormKey,
    mode: FormMode,
    operation_ref: &str,
    payload: &Value,
) -> Result<(), FetchError> {
    let (method, path) = submission_route(key, mode, operation_ref);
    let url = format!("{PROXY_BASE}{path}");

    let form_data = FormData::new().map_err(network)?;
    form_data
        .append_with_str("data", &payload.to_string())
        .map_err(network)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_body(&form_data);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(network)?;

    let raw = run_fetch(&request).await?;
    parse_submit_response(&raw)
}
