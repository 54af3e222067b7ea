//! UI Components

pub mod asset_panel;
pub mod connected_wallet;
pub mod error_banner;
pub mod navbar;
pub mod wallet_list;

pub use asset_panel::AssetPanel;
pub use connected_wallet::ConnectedWallet;
pub use error_banner::ErrorBanner;
pub use navbar::Navbar;
pub use wallet_list::WalletList;
