//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use checklist_core::FormKey;
use leptos::prelude::*;
use reactive_stores::Store;

/// App-level state shared across form pages. Form contents stay private to
/// each page; only navigation lives here.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Which checklist page is active
    pub active_form: FormKey,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Switch the active checklist page
pub fn store_set_active_form(store: &AppStore, key: FormKey) {
    store.active_form().set(key);
}
