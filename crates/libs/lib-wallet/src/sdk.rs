//! # Wallet SDK Capabilities
//!
//! The controller never talks to the browser directly. It consumes the
//! wallet-connector SDK through these two traits, which the wasm bindings in
//! `wallet-web` implement and tests replace with in-memory doubles.
//!
//! Futures are `?Send`: the browser runs everything on one thread and the JS
//! handles behind a session are not thread-safe.

use async_trait::async_trait;
use shared::dto::wallet::{Asset, ProviderDescriptor};

use crate::error::SdkError;

/// Discovery and connection entry points of the SDK.
#[async_trait(?Send)]
pub trait WalletSdk {
    /// Authorized connection returned by [`WalletSdk::enable`].
    type Session: WalletSession;

    /// Enumerate installed wallet extensions. Never fails; an unreachable SDK
    /// reports no providers.
    fn list_providers(&self) -> Vec<ProviderDescriptor>;

    /// Ask the named extension for access. Prompts the user on first use.
    async fn enable(&self, name: &str) -> Result<Self::Session, SdkError>;
}

/// Queries available on an enabled wallet.
#[async_trait(?Send)]
pub trait WalletSession: Clone {
    /// Addresses that have appeared on chain, in wallet order.
    async fn get_used_addresses(&self) -> Result<Vec<String>, SdkError>;

    /// Every asset the account holds, lovelace included.
    async fn get_assets(&self) -> Result<Vec<Asset>, SdkError>;
}
