//! # Data Transfer Objects (DTOs)
//!
//! Plain data describing what the wallet extension reports.
//!
//! - [`wallet`] - installed providers and held assets

pub mod wallet;

pub use wallet::*;
