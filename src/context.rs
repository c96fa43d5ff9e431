//! Application Context
//!
//! Shared state provided via Leptos Context API.

use checklist_core::PageQuery;
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Query parameters parsed once at mount; submit-time resolution may
    /// still re-read the address bar after these.
    pub page_query: ReadSignal<PageQuery>,
}

impl AppContext {
    pub fn new(page_query: ReadSignal<PageQuery>) -> Self {
        Self { page_query }
    }
}
