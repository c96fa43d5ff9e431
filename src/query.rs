//! Page Query Helpers
//!
//! Thin browser bindings for reading and clearing the query parameters
//! consumed by the form pages.

use checklist_core::PageQuery;
use wasm_bindgen::JsValue;

/// Parse the current window query string.
pub fn current_page_query() -> PageQuery {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    PageQuery::parse(&search)
}

/// Drop `operationRef`/`mode` from the address bar after an update-mode
/// submission, without reloading the page.
pub fn clear_page_query() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
    }
}
