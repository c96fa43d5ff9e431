//! Create/Update Submission Life Cycle
//!
//! One shared engine behind every form page: conditional draft fetch on
//! mount, guarded submission, mode-dependent reset. Form pages own the
//! markup; everything about talking to the backend lives here.

use checklist_core::{trim_operation_ref, FormMode, FormRecord, PageQuery};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::query;

/// How long the success banner stays up.
const SUCCESS_BANNER_MS: u32 = 4000;

pub const MSG_REF_REQUIRED: &str = "Operation reference number is required.";

/// Reactive state for one form instance. All signals are arena-backed, so
/// the whole bundle is `Copy` and can move into event handlers freely.
pub struct FormLifecycle<T>
where
    T: FormRecord + Send + Sync,
{
    pub record: RwSignal<T>,
    pub mode: RwSignal<FormMode>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl<T: FormRecord + Send + Sync> Clone for FormLifecycle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: FormRecord + Send + Sync> Copy for FormLifecycle<T> {}

impl<T: FormRecord + Send + Sync> FormLifecycle<T> {
    /// Fresh state for one page visit. Update mode with a reference in the
    /// query kicks off the draft fetch immediately.
    pub fn start(page: &PageQuery) -> Self {
        let lifecycle = Self {
            record: RwSignal::new(T::blank()),
            mode: RwSignal::new(page.mode),
            loading: RwSignal::new(false),
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        };

        if let Some(operation_ref) = &page.operation_ref {
            let operation_ref = operation_ref.clone();
            lifecycle
                .record
                .update(|record| record.set_operation_ref(operation_ref.clone()));
            if page.mode.is_update() {
                lifecycle.load_draft(operation_ref);
            }
        }

        lifecycle
    }

    /// Fetch and reconcile an existing draft. No-op while a load is
    /// already in flight.
    pub fn load_draft(self, operation_ref: String) {
        if self.loading.get_untracked() {
            return;
        }
        self.loading.set(true);
        self.error.set(None);

        spawn_local(async move {
            match api::get_draft(T::KEY, &operation_ref).await {
                Ok(value) => {
                    let mut record = T::from_draft(&value);
                    if record.operation_ref().is_empty() {
                        record.set_operation_ref(operation_ref);
                    }
                    self.record.set(record);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("draft fetch failed: {err:?}").into());
                    self.error.set(Some(err.user_message()));
                }
            }
            self.loading.set(false);
        });
    }

    /// Reference used at submit time: form state first, then the query
    /// parsed at mount, then a fresh re-read of the address bar.
    fn resolve_operation_ref(&self, mounted_query: &PageQuery) -> Option<String> {
        let from_state = trim_operation_ref(self.record.get_untracked().operation_ref());
        if !from_state.is_empty() {
            return Some(from_state);
        }
        if let Some(reference) = &mounted_query.operation_ref {
            return Some(reference.clone());
        }
        query::current_page_query().operation_ref
    }

    /// Submit the current record. A missing reference is a local
    /// validation error and no request is made; duplicate submissions are
    /// guarded by the `submitting` flag.
    pub fn submit(self, mounted_query: PageQuery) {
        if self.submitting.get_untracked() {
            return;
        }
        let Some(operation_ref) = self.resolve_operation_ref(&mounted_query) else {
            self.error.set(Some(MSG_REF_REQUIRED.to_string()));
            return;
        };

        self.submitting.set(true);
        self.error.set(None);
        self.success.set(None);

        spawn_local(async move {
            let mut record = self.record.get_untracked();
            record.set_operation_ref(operation_ref.clone());
            let mode = self.mode.get_untracked();
            let payload = record.to_payload();

            match api::submit(T::KEY, mode, &operation_ref, &payload).await {
                Ok(()) => {
                    self.record.set(record.reset_after_submit(mode));
                    if mode.is_update() {
                        self.mode.set(FormMode::Create);
                        query::clear_page_query();
                    }
                    self.submitting.set(false);
                    self.success.set(Some(success_message(mode).to_string()));
                    TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                    self.success.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("submission failed: {err:?}").into());
                    self.error.set(Some(err.user_message()));
                    self.submitting.set(false);
                }
            }
        });
    }
}

fn success_message(mode: FormMode) -> &'static str {
    if mode.is_update() {
        "Checklist updated successfully."
    } else {
        "Checklist submitted successfully."
    }
}
