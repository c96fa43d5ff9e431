//! Pre-Transfer Cargo Checklist Form Page

use checklist_core::forms::PreTransferChecklist;
use checklist_core::{FormKey, FormRecord};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::lifecycle::FormLifecycle;

use super::{
    input_value, textarea_value, ChecklistTable, DocumentInfoFields, SignatureUpload, StatusBanner,
};

#[component]
pub fn PreTransferForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let page = ctx.page_query.get_untracked();
    let lifecycle = FormLifecycle::<PreTransferChecklist>::start(&page);
    let record = lifecycle.record;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        lifecycle.submit(ctx.page_query.get_untracked());
    };

    view! {
        <form class="checklist-form" on:submit=on_submit>
            <h2>{FormKey::PreTransfer.title()}</h2>
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
                <legend>"Vessels"</legend>
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
            </fieldset>

            <fieldset class="form-section">
                <legend>"Transfer Particulars"</legend>
                <div class="field-row">
                    <label>"Cargo"</label>
                    <input
                        type="text"
                        prop:value=move || record.get().cargo_name
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            record.update(|r| r.cargo_name = value);
                        }
                    />
                </div>
                <div class="field-row">
                    <label>"Quantity"</label>
                    <input
                        type="text"
                        prop:value=move || record.get().cargo_quantity
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            record.update(|r| r.cargo_quantity = value);
                        }
                    />
                </div>
                <div class="field-row">
                    <label>"Agreed Transfer Rate"</label>
                    <input
                        type="text"
                        prop:value=move || record.get().transfer_rate
                        on:input=move |ev| {
                            let value = input_value(&ev);
                            record.update(|r| r.transfer_rate = value);
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
            </fieldset>

            <ChecklistTable
                rows=Signal::derive(move || record.get().checklist)
                on_checked=Callback::new(move |(index, value): (usize, bool)| {
                    record.update(|r| {
                        if let Some(row) = r.checklist.get_mut(index) {
                            row.set_checked(value);
                        }
                    });
                })
                on_not_applicable=Callback::new(move |(index, value): (usize, bool)| {
                    record.update(|r| {
                        if let Some(row) = r.checklist.get_mut(index) {
                            row.set_not_applicable(value);
                        }
                    });
                })
                on_remarks=Callback::new(move |(index, value): (usize, String)| {
                    record.update(|r| {
                        if let Some(row) = r.checklist.get_mut(index) {
                            row.remarks = value;
                        }
                    });
                })
            />

            <div class="field-row">
                <label>"Remarks"</label>
                <textarea
                    prop:value=move || record.get().remarks
                    on:input=move |ev| {
                        let value = textarea_value(&ev);
                        record.update(|r| r.remarks = value);
                    }
                ></textarea>
            </div>

            <div class="signature-row">
                <SignatureUpload
                    label="Master, Discharging Ship"
                    value=Signal::derive(move || record.get().discharging_master_signature)
                    on_change=Callback::new(move |data_url| {
                        record.update(|r| r.discharging_master_signature = data_url);
                    })
                />
                <SignatureUpload
                    label="Master, Receiving Ship"
                    value=Signal::derive(move || record.get().receiving_master_signature)
                    on_change=Callback::new(move |data_url| {
                        record.update(|r| r.receiving_master_signature = data_url);
                    })
                />
            </div>

            <button
                type="submit"
                disabled=move || lifecycle.submitting.get() || lifecycle.loading.get()
            >
                {move || {
                    if lifecycle.mode.get().is_update() { "Update Checklist" } else { "Submit Checklist" }
                }}
            </button>
        </form>
    }
}
