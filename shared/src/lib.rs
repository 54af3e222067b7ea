//! # Shared Wallet Types
//!
//! Types exchanged between the wallet-connector SDK boundary, the controller in
//! `lib-wallet`, and the Leptos front end in `wallet-web`.
//!
//! ## Structure
//!
//! - **[`dto`]**: data carried across the SDK boundary
//!   - **[`dto::wallet`]**: provider descriptors and asset records
//! - **[`utils`]**: shared utility functions
//!   - **[`utils::format_address`]**: shorten an address for display
//!   - **[`utils::truncate_address`]**: shorten with the default Cardano widths
//!
//! ## Wire Format
//!
//! Records mirror the JavaScript objects the SDK hands back, so fields use
//! **camelCase** in JSON (`policyId`, `assetName`). Optional fields are omitted
//! when `None`.
//!
//! ```rust
//! use shared::dto::wallet::Asset;
//!
//! let json = r#"{"unit":"lovelace","quantity":"1500000"}"#;
//! let asset: Asset = serde_json::from_str(json).unwrap();
//! assert_eq!(asset.unit, "lovelace");
//! assert!(asset.policy_id.is_none());
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
