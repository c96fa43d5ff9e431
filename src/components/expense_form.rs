//! Operation Expense Sheet Form Page
//!
//! Quantities and unit costs are editable; line amounts and the total are
//! derived from the record.

use checklist_core::forms::ExpenseSheet;
use checklist_core::{FormKey, FormRecord};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::lifecycle::FormLifecycle;

use super::{input_value, DocumentInfoFields, SignatureUpload, StatusBanner};

#[component]
pub fn ExpenseSheetForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let page = ctx.page_query.get_untracked();
    let lifecycle = FormLifecycle::<ExpenseSheet>::start(&page);
    let record = lifecycle.record;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        lifecycle.submit(ctx.page_query.get_untracked());
    };

    view! {
        <form class="checklist-form" on:submit=on_submit>
            <h2>{FormKey::ExpenseSheet.title()}</h2>
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

            <div class="field-row">
                <label>"Currency"</label>
                <input
                    type="text"
                    prop:value=move || record.get().currency
                    on:input=move |ev| {
                        let value = input_value(&ev);
                        record.update(|r| r.currency = value);
                    }
                />
            </div>

            <table class="expense-table">
                <thead>
                    <tr>
                        <th>"Description"</th>
                        <th>"Qty"</th>
                        <th>"Unit Cost"</th>
                        <th>"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        record
                            .get()
                            .items
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let amount = item.amount();
                                view! {
                                    <tr>
                                        <td>{item.description.clone()}</td>
                                        <td>
                                            <input
                                                type="number"
                                                step="any"
                                                prop:value=item.quantity.to_string()
                                                on:input=move |ev| {
                                                    let value =
                                                        input_value(&ev).parse().unwrap_or(0.0);
                                                    record.update(|r| {
                                                        if let Some(i) = r.items.get_mut(index) {
                                                            i.quantity = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="number"
                                                step="any"
                                                prop:value=item.unit_cost.to_string()
                                                on:input=move |ev| {
                                                    let value =
                                                        input_value(&ev).parse().unwrap_or(0.0);
                                                    record.update(|r| {
                                                        if let Some(i) = r.items.get_mut(index) {
                                                            i.unit_cost = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td class="amount">{format!("{amount:.2}")}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="3">"Total"</td>
                        <td class="amount">
                            {move || format!("{:.2} {}", record.get().total(), record.get().currency)}
                        </td>
                    </tr>
                </tfoot>
            </table>

            <div class="field-row">
                <label>"Approved By"</label>
                <input
                    type="text"
                    prop:value=move || record.get().approved_by
                    on:input=move |ev| {
                        let value = input_value(&ev);
                        record.update(|r| r.approved_by = value);
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
                    if lifecycle.mode.get().is_update() {
                        "Update Expense Sheet"
                    } else {
                        "Submit Expense Sheet"
                    }
                }}
            </button>
        </form>
    }
}
