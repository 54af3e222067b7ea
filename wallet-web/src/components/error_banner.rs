//! The single visible error message

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        {move || wallet_ctx.error().map(|message| view! {
            <div class="error" role="alert">
                <p class="error-title">"An Error Occurred:"</p>
                <p class="error-message">{message}</p>
            </div>
        })}
    }
}
