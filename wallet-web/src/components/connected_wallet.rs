//! Connected wallet summary with the disconnect control

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectedWallet() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        <div class="connected">
            <p class="success">"Cardano Wallet Connected"</p>
            <p class="wallet-address">
                "Address: " {move || wallet_ctx.address().unwrap_or_default()}
            </p>
            <button class="btn btn-danger" on:click=move |_| wallet_ctx.disconnect()>
                "Disconnect"
            </button>
        </div>
    }
}
