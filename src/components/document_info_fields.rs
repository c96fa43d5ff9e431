//! Document-Control Header Fields
//!
//! Form number / issue date / approved-by block shared by every checklist.

use checklist_core::forms::DocumentInfo;
use leptos::prelude::*;

use super::input_value;

#[component]
pub fn DocumentInfoFields(
    #[prop(into)] info: Signal<DocumentInfo>,
    on_change: Callback<DocumentInfo>,
) -> impl IntoView {
    view! {
        <fieldset class="document-info">
            <legend>"Document Control"</legend>
            <div class="field-row">
                <label>"Form No."</label>
                <input
                    type="text"
                    prop:value=move || info.get().form_no
                    on:input=move |ev| {
                        let mut updated = info.get_untracked();
                        updated.form_no = input_value(&ev);
                        on_change.run(updated);
                    }
                />
            </div>
            <div class="field-row">
                <label>"Issue Date"</label>
                <input
                    type="date"
                    prop:value=move || info.get().issue_date
                    on:input=move |ev| {
                        let mut updated = info.get_untracked();
                        updated.issue_date = input_value(&ev);
                        on_change.run(updated);
                    }
                />
            </div>
            <div class="field-row">
                <label>"Approved By"</label>
                <input
                    type="text"
                    prop:value=move || info.get().approved_by
                    on:input=move |ev| {
                        let mut updated = info.get_untracked();
                        updated.approved_by = input_value(&ev);
                        on_change.run(updated);
                    }
                />
            </div>
        </fieldset>
    }
}
