//! Master's Standing Orders Form Page

use checklist_core::forms::StandingOrders;
use checklist_core::{FormKey, FormRecord};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::lifecycle::FormLifecycle;

use super::{input_checked, input_value, DocumentInfoFields, SignatureUpload, StatusBanner};

#[component]
pub fn StandingOrdersForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let page = ctx.page_query.get_untracked();
    let lifecycle = FormLifecycle::<StandingOrders>::start(&page);
    let record = lifecycle.record;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        lifecycle.submit(ctx.page_query.get_untracked());
    };

    view! {
        <form class="checklist-form" on:submit=on_submit>
            <h2>{FormKey::StandingOrders.title()}</h2>
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
                <label>"Vessel"</label>
                <input
                    type="text"
                    prop:value=move || record.get().vessel_name
                    on:input=move |ev| {
                        let value = input_value(&ev);
                        record.update(|r| r.vessel_name = value);
                    }
                />
            </div>
            <div class="field-row">
                <label>"Master"</label>
                <input
                    type="text"
                    prop:value=move || record.get().master_name
                    on:input=move |ev| {
                        let value = input_value(&ev);
                        record.update(|r| r.master_name = value);
                    }
                />
            </div>

            <table class="orders-table">
                <thead>
                    <tr>
                        <th class="col-number">"No."</th>
                        <th>"Order"</th>
                        <th class="col-check">"Ack."</th>
                        <th>"Initials"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        record
                            .get()
                            .orders
                            .into_iter()
                            .enumerate()
                            .map(|(index, order)| {
                                view! {
                                    <tr>
                                        <td class="col-number">{order.order_no.clone()}</td>
                                        <td>{order.text.clone()}</td>
                                        <td class="col-check">
                                            <input
                                                type="checkbox"
                                                prop:checked=order.acknowledged
                                                on:change=move |ev| {
                                                    let value = input_checked(&ev);
                                                    record.update(|r| {
                                                        if let Some(o) = r.orders.get_mut(index) {
                                                            o.acknowledged = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="text"
                                                prop:value=order.initials.clone()
                                                on:input=move |ev| {
                                                    let value = input_value(&ev);
                                                    record.update(|r| {
                                                        if let Some(o) = r.orders.get_mut(index) {
                                                            o.initials = value;
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
                label="Master's Signature"
                value=Signal::derive(move || record.get().master_signature)
                on_change=Callback::new(move |data_url| {
                    record.update(|r| r.master_signature = data_url);
                })
            />

            <button
                type="submit"
                disabled=move || lifecycle.submitting.get() || lifecycle.loading.get()
            >
                {move || {
                    if lifecycle.mode.get().is_update() { "Update Orders" } else { "Submit Orders" }
                }}
            </button>
        </form>
    }
}
