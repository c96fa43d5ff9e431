//! Status Banner Component
//!
//! Inline loading/error/success feedback shown at the top of every form.
//! Error text arrives pre-normalized; nothing technical is rendered here.

use leptos::prelude::*;

#[component]
pub fn StatusBanner(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] success: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="banner banner-loading">"Loading checklist data..."</div>
        </Show>
        {move || {
            error.get().map(|message| view! { <div class="banner banner-error">{message}</div> })
        }}
        {move || {
            success
                .get()
                .map(|message| view! { <div class="banner banner-success">{message}</div> })
        }}
    }
}
