//! # Wallet Connection Core
//!
//! Platform-independent state machine behind the wallet page. The browser
//! bindings in `wallet-web` implement [`sdk::WalletSdk`]; everything else
//! (discovery filtering, connect/disconnect, asset fetching, error reporting)
//! lives here so it can be exercised with an in-memory SDK in native tests.
//!
//! ## Modules
//!
//! - [`controller`]: [`WalletController`], the single owner of page state
//! - [`sdk`]: capability traits the wallet-connector SDK is consumed through
//! - [`error`]: [`SdkError`], [`WalletError`] and the error report format
//! - [`config`]: discovery cadence and preferred-wallet filter
//!
//! ## Flow
//!
//! ```text
//! refresh_providers() ─► connect(name) ─► fetch_assets() ─► disconnect()
//!                           │                  │
//!                      begin/finish        begin/finish
//!                      (generation-tagged tickets)
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod sdk;

pub use config::{DiscoveryPolicy, WalletConfig};
pub use controller::{
    AssetTicket, ConnectOption, ConnectTicket, ConnectionStatus, Outcome, WalletController,
    WalletSnapshot,
};
pub use error::{Result, SdkError, WalletError};
pub use sdk::{WalletSdk, WalletSession};
