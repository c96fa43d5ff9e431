//! Signature Upload Component
//!
//! File picker plus preview. The stored value is the full data URL; the
//! payload builder strips the prefix on the way out.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::signature::read_as_data_url;

#[component]
pub fn SignatureUpload(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let on_file = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_ref::<web_sys::HtmlInputElement>().cloned())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };
        read_as_data_url(file, move |data_url| on_change.run(data_url));
    };

    view! {
        <div class="signature-upload">
            <label>{label}</label>
            <input type="file" accept="image/*" on:change=on_file />
            <Show when=move || !value.get().is_empty()>
                <img class="signature-preview" src=move || value.get() alt="signature preview" />
            </Show>
        </div>
    }
}
