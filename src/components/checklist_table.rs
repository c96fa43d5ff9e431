//! Checklist Table Component
//!
//! Shared Yes / N-A / remarks table. The mutual exclusion between the two
//! checkboxes is enforced by the row setters in the record, not here.

use checklist_core::forms::ChecklistRow;
use leptos::prelude::*;

use super::{input_checked, input_value};

#[component]
pub fn ChecklistTable(
    #[prop(into)] rows: Signal<Vec<ChecklistRow>>,
    on_checked: Callback<(usize, bool)>,
    on_not_applicable: Callback<(usize, bool)>,
    on_remarks: Callback<(usize, String)>,
) -> impl IntoView {
    view! {
        <table class="checklist-table">
            <thead>
                <tr>
                    <th class="col-number">"No."</th>
                    <th>"Item"</th>
                    <th class="col-check">"Yes"</th>
                    <th class="col-check">"N/A"</th>
                    <th>"Remarks"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, row)| {
                            view! {
                                <tr>
                                    <td class="col-number">{row.cl_number.clone()}</td>
                                    <td>{row.description.clone()}</td>
                                    <td class="col-check">
                                        <input
                                            type="checkbox"
                                            prop:checked=row.checked
                                            on:change=move |ev| {
                                                on_checked.run((index, input_checked(&ev)))
                                            }
                                        />
                                    </td>
                                    <td class="col-check">
                                        <input
                                            type="checkbox"
                                            prop:checked=row.not_applicable
                                            on:change=move |ev| {
                                                on_not_applicable.run((index, input_checked(&ev)))
                                            }
                                        />
                                    </td>
                                    <td>
                                        <input
                                            type="text"
                                            prop:value=row.remarks.clone()
                                            on:input=move |ev| {
                                                on_remarks.run((index, input_value(&ev)))
                                            }
                                        />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
