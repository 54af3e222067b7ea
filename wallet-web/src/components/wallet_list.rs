//! Connect buttons, one per discovered wallet, or the "no wallet" panel.

use leptos::prelude::*;
use lib_wallet::controller::display_name;

use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{WALLET_INSTALL_LABEL, WALLET_INSTALL_URL};

#[component]
pub fn WalletList() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    view! {
        {move || {
            let Some(options) = wallet_ctx
                .snapshot
                .with(|state| state.has_providers().then(|| state.connect_options()))
            else {
                return view! { <NoWalletFound/> }.into_any();
            };

            view! {
                <div class="wallet-list">
                    <p class="wallet-hint">"Select a wallet to connect"</p>
                    {options.into_iter().map(|option| {
                        let label = option.label();
                        let disabled = !option.enabled;
                        let icon = option.provider.icon.clone();
                        let alt = option.provider.name.clone();
                        let name = option.provider.name;

                        view! {
                            <button
                                class="wallet-button"
                                disabled=disabled
                                on:click=move |_| wallet_ctx.connect(name.clone())
                            >
                                <img src=icon alt=alt class="wallet-icon"/>
                                <span>{label}</span>
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            }.into_any()
        }}
    }
}

#[component]
fn NoWalletFound() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let heading = match wallet_ctx.preferred_wallet() {
        Some(name) => format!("{} Wallet Not Found!", display_name(&name)),
        None => "No Cardano Wallet Found!".to_string(),
    };

    view! {
        <div class="no-wallet">
            <p class="warning">{heading}</p>
            <p class="muted">"To continue, install a Cardano wallet browser extension and reload this page."</p>
            <a href=WALLET_INSTALL_URL target="_blank" rel="noopener noreferrer" class="btn">
                {WALLET_INSTALL_LABEL}
            </a>
        </div>
    }
}
