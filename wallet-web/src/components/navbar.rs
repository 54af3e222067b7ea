//! Navigation Bar Component
//!
//! Title on the left, connection status on the right.

use leptos::prelude::*;
use leptos_router::components::A;
use lib_wallet::ConnectionStatus;
use shared::utils::truncate_address;

use crate::state::wallet::use_wallet_context;
use crate::utils::constants::PAGE_TITLE;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let status = move || {
        wallet_ctx.snapshot.with(|state| match state.status {
            ConnectionStatus::Disconnected => ("status-chip", "Not connected".to_string()),
            ConnectionStatus::Connecting => ("status-chip pending", "Connecting...".to_string()),
            ConnectionStatus::Connected => (
                "status-chip connected",
                state
                    .address
                    .as_deref()
                    .map(truncate_address)
                    .unwrap_or_default(),
            ),
        })
    };

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">{PAGE_TITLE}</span>
                </A>
                {move || {
                    let (class, text) = status();
                    view! { <span class=class>{text}</span> }
                }}
            </div>
        </nav>
    }
}
