//! Operation Timesheet Form Page
//!
//! One row per standard milestone; only the timing columns are editable.

use checklist_core::forms::Timesheet;
use checklist_core::{FormKey, FormRecord};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::lifecycle::FormLifecycle;

use super::{input_value, DocumentInfoFields, SignatureUpload, StatusBanner};

#[component]
pub fn TimesheetForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let page = ctx.page_query.get_untracked();
    let lifecycle = FormLifecycle::<Timesheet>::start(&page);
    let record = lifecycle.record;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        lifecycle.submit(ctx.page_query.get_untracked());
    };

    view! {
        <form class="checklist-form" on:submit=on_submit>
            <h2>{FormKey::Timesheet.title()}</h2>
            <StatusBanner
                loading=lifecycle.loading
                error=lifecycle.error
                success=lifecycle.success
            />

            <div class="field-row">
                <label>"Operation Ref. No."</label>
                <input
                    type="text"
                    prop:value=move || record.get().operation_ref
                    on:input=move |ev| {
                        let value = input_value(&ev);
                        record.update(|r| r.set_operation_ref(value));
                    }
                />
            </div>

            <DocumentInfoFields
                info=Signal::derive(move || record.get().document_info)
                on_change=Callback::new(move |info| record.update(|r| r.document_info = info))
            />

            <fieldset class="form-section">
                <legend>"Operation"</legend>
                <div class="field-row">
                    <label>"Discharging Ship"</label>
                    <input
                        type="text"
                        prop:value=move || record.get().discharging_ship
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            record.update(|r| r.discharging_ship = value);
                        }
                    />
                </div>
                <div class="field-row">
                    <label>"Receiving Ship"</label>
                    <input
                        type="text"
                        prop:value=move || record.get().receiving_ship
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            record.update(|r| r.receiving_ship = value);
                        }
                    />
                </div>
                <div class="field-row">
                    <label>"Location"</label>
                    <input
                        type="text"
                        prop:value=move || record.get().location
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            record.update(|r| r.location = value);
                        }
                    />
                </div>
            </fieldset>

            <table class="timesheet-table">
                <thead>
                    <tr>
                        <th>"Activity"</th>
                        <th>"Date"</th>
                        <th>"From"</th>
                        <th>"To"</th>
                        <th>"Remarks"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        record
                            .get()
                            .entries
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! {
                                    <tr>
                                        <td>{entry.activity.clone()}</td>
                                        <td>
                                            <input
                                                type="date"
                                                prop:value=entry.date.clone()
                                                on:input=move |ev| {
                                                    let value = input_value(&ev);
                                                    record.update(|r| {
                                                        if let Some(e) = r.entries.get_mut(index) {
                                                            e.date = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="time"
                                                prop:value=entry.time_from.clone()
                                                on:input=move |ev| {
                                                    let value = input_value(&ev);
                                                    record.update(|r| {
                                                        if let Some(e) = r.entries.get_mut(index) {
                                                            e.time_from = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="time"
                                                prop:value=entry.time_to.clone()
                                                on:input=move |ev| {
                                                    let value = input_value(&ev);
                                                    record.update(|r| {
                                                        if let Some(e) = r.entries.get_mut(index) {
                                                            e.time_to = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="text"
                                                prop:value=entry.remarks.clone()
                                                on:input=move |ev| {
                                                    let value = input_value(&ev);
                                                    record.update(|r| {
                                                        if let Some(e) = r.entries.get_mut(index) {
                                                            e.remarks = value;
                                                        }
                                                    });
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

            <div class="field-row">
                <label>"Prepared By"</label>
                <input
                    type="text"
                    prop:value=move || record.get().prepared_by
                    on:input=move |ev| {
                        let value = input_value(&ev);
                        record.update(|r| r.prepared_by = value);
                    }
                />
            </div>
            <div class="field-row">
                <label>"Date"</label>
                <input
                    type="date"
                    prop:value=move || record.get().date
                    on:input=move |ev| {
                        let value = input_value(&ev);
                        record.update(|r| r.date = value);
                    }
                />
            </div>

            <SignatureUpload
                label="Signature"
                value=Signal::derive(move || record.get().signature)
                on_change=Callback::new(move |data_url| {
                    record.update(|r| r.signature = data_url);
                })
            />

            <button
                type="submit"
                disabled=move || lifecycle.submitting.get() || lifecycle.loading.get()
            >
                {move || {
                    if lifecycle.mode.get().is_update() { "Update Timesheet" } else { "Submit Timesheet" }
                }}
            </button>
        </form>
    }
}
