//! Wallet page: discovery, connect, assets, errors

use leptos::prelude::*;

use crate::components::{AssetPanel, ConnectedWallet, ErrorBanner, WalletList};
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::PAGE_TITLE;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    // Discovery runs on mount; the poll timer belongs to the app context
    wallet_ctx.refresh_providers();

    view! {
        <main class="page">
            <div class="card">
                <h1 class="card-title">{PAGE_TITLE}</h1>

                <div class="wallet-section">
                    {move || if wallet_ctx.is_connected() {
                        view! { <ConnectedWallet/> }.into_any()
                    } else {
                        view! { <WalletList/> }.into_any()
                    }}
                </div>

                <Show when=move || wallet_ctx.is_connected()>
                    <AssetPanel/>
                </Show>

                <ErrorBanner/>
            </div>
        </main>
    }
}
