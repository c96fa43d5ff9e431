//! Form Navigation Bar
//!
//! Tab-style switcher between the checklist pages.

use checklist_core::FormKey;
use leptos::prelude::*;

use crate::store::{store_set_active_form, use_app_store, AppStateStoreFields};

#[component]
pub fn FormNav() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="form-nav">
            {FormKey::ALL
                .into_iter()
                .map(|key| {
                    let is_active = move || store.active_form().get() == key;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_active() { "nav-btn active" } else { "nav-btn" }
                            }
                            on:click=move |_| store_set_active_form(&store, key)
                        >
                            {key.title()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
