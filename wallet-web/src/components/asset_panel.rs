//! Asset viewer: fetch button, then the collection as formatted JSON

use leptos::prelude::*;
use shared::dto::wallet::assets_to_pretty_json;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn AssetPanel() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let loading = move || wallet_ctx.snapshot.with(|state| state.loading_assets);

    view! {
        <section class="asset-panel">
            <h2>"Get Wallet Assets"</h2>
            {move || {
                let rendered = wallet_ctx
                    .snapshot
                    .with(|state| state.assets.as_deref().map(assets_to_pretty_json));

                match rendered {
                    Some(json) => view! {
                        <div class="asset-json">
                            <pre><code class="language-json">{json}</code></pre>
                        </div>
                        <button
                            class="btn"
                            disabled=loading
                            on:click=move |_| wallet_ctx.fetch_assets()
                        >
                            "Refresh"
                        </button>
                    }.into_any(),
                    None => view! {
                        <button
                            type="button"
                            class="btn"
                            class:loading=loading
                            disabled=loading
                            on:click=move |_| wallet_ctx.fetch_assets()
                        >
                            "Get Wallet Assets"
                        </button>
                    }.into_any(),
                }
            }}
        </section>
    }
}
