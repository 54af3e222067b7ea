//! Application constants

pub const PAGE_TITLE: &str = "Cardano Wallet Viewer";

/// Where the "no wallet found" panel sends users.
pub const WALLET_INSTALL_URL: &str = "https://eternl.io/";
pub const WALLET_INSTALL_LABEL: &str = "Visit eternl.io";

/// Element shown by `index.html` until the wasm module mounts.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
