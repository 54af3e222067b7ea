//! Mesh SDK Integration via wasm-bindgen
//!
//! The page loads `@meshsdk/core` as an ES module and exposes it as
//! `window.MeshSDK` (see `index.html`). This module binds the parts of
//! `BrowserWallet` the controller needs and adapts them to the
//! [`WalletSdk`] / [`WalletSession`] traits.

use async_trait::async_trait;
use js_sys::Reflect;
use lib_wallet::{SdkError, WalletSdk, WalletSession};
use shared::dto::wallet::{Asset, ProviderDescriptor};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ============================================================================
// BROWSER WALLET BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function browserWallet() {
    const mesh = globalThis.MeshSDK;
    return mesh && mesh.BrowserWallet ? mesh.BrowserWallet : null;
}

export function listInstalledWallets() {
    const BrowserWallet = browserWallet();
    if (!BrowserWallet) {
        return [];
    }
    try {
        return BrowserWallet.getInstalledWallets().map((wallet) => ({
            // enable() is keyed by the window.cardano id; fall back to name
            name: String(wallet.id || wallet.name),
            icon: wallet.icon ? String(wallet.icon) : '',
            version: wallet.version ? String(wallet.version) : '',
        }));
    } catch (error) {
        console.error('Wallet discovery failed:', error);
        return [];
    }
}

export async function enableWallet(name) {
    const BrowserWallet = browserWallet();
    if (!BrowserWallet) {
        throw new Error('Mesh SDK is not loaded');
    }
    return await BrowserWallet.enable(name);
}
")]
extern "C" {
    /// Installed CIP-30 wallets as `{ name, icon, version }` objects
    #[wasm_bindgen(js_name = listInstalledWallets)]
    fn list_installed_wallets() -> JsValue;

    /// Prompt the named wallet for access
    #[wasm_bindgen(catch, js_name = enableWallet)]
    async fn enable_wallet(name: &str) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// A `BrowserWallet` instance returned by `BrowserWallet.enable`.
    #[derive(Clone)]
    pub type BrowserWalletHandle;

    #[wasm_bindgen(method, catch, js_name = getUsedAddresses)]
    async fn get_used_addresses(this: &BrowserWalletHandle) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getAssets)]
    async fn get_assets(this: &BrowserWalletHandle) -> Result<JsValue, JsValue>;
}

// ============================================================================
// ERROR EXTRACTION
// ============================================================================

/// Read a string at `path` inside a JS object, if every hop exists.
fn string_at(value: &JsValue, path: &[&str]) -> Option<String> {
    let mut current = value.clone();
    for key in path {
        if !current.is_object() {
            return None;
        }
        current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
    }
    current.as_string()
}

/// Convert a thrown JS value into an [`SdkError`].
pub fn sdk_error(value: JsValue) -> SdkError {
    SdkError::from_fields(
        string_at(&value, &["response", "data", "message"]),
        string_at(&value, &["info"]),
        string_at(&value, &["message"]),
        value.as_string(),
    )
}

fn decode<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, SdkError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| SdkError::new(format!("Unexpected {} from wallet: {}", what, e)))
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// The browser's Mesh `BrowserWallet`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeshSdk;

/// An enabled wallet.
#[derive(Clone)]
pub struct MeshSession {
    wallet: BrowserWalletHandle,
}

#[async_trait(?Send)]
impl WalletSdk for MeshSdk {
    type Session = MeshSession;

    fn list_providers(&self) -> Vec<ProviderDescriptor> {
        serde_wasm_bindgen::from_value(list_installed_wallets()).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed wallet list: {}", e);
            vec![]
        })
    }

    async fn enable(&self, name: &str) -> Result<MeshSession, SdkError> {
        let wallet = enable_wallet(name).await.map_err(sdk_error)?;
        Ok(MeshSession {
            wallet: wallet.unchecked_into(),
        })
    }
}

#[async_trait(?Send)]
impl WalletSession for MeshSession {
    async fn get_used_addresses(&self) -> Result<Vec<String>, SdkError> {
        let addresses = self.wallet.get_used_addresses().await.map_err(sdk_error)?;
        decode(addresses, "address list")
    }

    async fn get_assets(&self) -> Result<Vec<Asset>, SdkError> {
        let assets = self.wallet.get_assets().await.map_err(sdk_error)?;
        decode(assets, "asset list")
    }
}
