//! STS Checklists App
//!
//! Top-level component: parses the page query once, provides the app store
//! and context, and mounts the active form page.

use checklist_core::FormKey;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ExpenseSheetForm, FormNav, MooringReadinessForm, PreTransferForm, StandingOrdersForm,
    TimesheetForm,
};
use crate::context::AppContext;
use crate::query;
use crate::store::{use_app_store, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let (page_query, _set_page_query) = signal(query::current_page_query());

    provide_context(Store::new(AppState::new()));
    provide_context(AppContext::new(page_query));

    let store = use_app_store();

    view! {
        <div class="app-layout">
            <header class="title-bar">
                <h1>"STS Transfer Checklists"</h1>
            </header>

            <FormNav />

            <main class="main-content">
                {move || match store.active_form().get() {
                    FormKey::MooringReadiness => view! { <MooringReadinessForm /> }.into_any(),
                    FormKey::PreTransfer => view! { <PreTransferForm /> }.into_any(),
                    FormKey::Timesheet => view! { <TimesheetForm /> }.into_any(),
                    FormKey::ExpenseSheet => view! { <ExpenseSheetForm /> }.into_any(),
                    FormKey::StandingOrders => view! { <StandingOrdersForm /> }.into_any(),
                }}
            </main>
        </div>
    }
}
