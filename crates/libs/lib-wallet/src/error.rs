//! # Wallet Error Types
//!
//! Two layers, following the `thiserror` pattern used across the workspace:
//!
//! - [`SdkError`]: a failure reported by the wallet-connector SDK or the
//!   extension behind it. Carries the error's own message and, when present,
//!   a nested structured message (`response.data.message`).
//! - [`WalletError`]: what a controller operation can fail with.
//!
//! ## Report Format
//!
//! Failures reach the user as a single line, `"<prefix>: <message>"`, where the
//! message is the most specific one available:
//!
//! ```rust
//! use lib_wallet::error::{report_message, SdkError, WalletError};
//!
//! let err = WalletError::from(SdkError::new("Request failed").with_detail("user declined"));
//! assert_eq!(report_message("Failed to connect wallet", &err), "Failed to connect wallet: user declined");
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Prefix used when the caller does not supply one.
pub const DEFAULT_ERROR_PREFIX: &str = "An error occurred";

/// Message used when nothing usable can be extracted from an error value.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error.";

/// A failure reported across the SDK boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SdkError {
    /// The error's own message
    pub message: String,
    /// Nested structured message, preferred when present
    pub detail: Option<String>,
}

impl SdkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Build from the fields a thrown JavaScript value may carry.
    ///
    /// Priority: `response.data.message`, then the CIP-30 `info` field, then
    /// `Error.message`, then the value itself if it was a string.
    pub fn from_fields(
        response_message: Option<String>,
        info: Option<String>,
        message: Option<String>,
        text: Option<String>,
    ) -> Self {
        let message = [info, message, text]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());

        Self {
            message,
            detail: response_message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// The most specific message available.
    pub fn user_message(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.message)
    }
}

/// Errors produced by controller operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The named provider is not among the discovered extensions.
    #[error("{0} wallet is not available.")]
    ProviderUnavailable(String),

    /// The session was granted but holds no used address.
    #[error("wallet reported no used addresses")]
    NoUsedAddress,

    /// The SDK or extension rejected the request.
    #[error(transparent)]
    Sdk(#[from] SdkError),
}

impl WalletError {
    pub fn user_message(&self) -> String {
        match self {
            WalletError::Sdk(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}

/// Render the single user-visible error line.
pub fn report_message(prefix: &str, err: &WalletError) -> String {
    let prefix = if prefix.trim().is_empty() {
        DEFAULT_ERROR_PREFIX
    } else {
        prefix
    };
    format!("{}: {}", prefix, err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_detail() {
        let err = SdkError::new("Request failed with status code 400").with_detail("Invalid address");
        assert_eq!(err.user_message(), "Invalid address");
        assert_eq!(err.to_string(), "Request failed with status code 400");
    }

    #[test]
    fn test_from_fields_priority() {
        let err = SdkError::from_fields(
            Some("from response".to_string()),
            Some("from info".to_string()),
            Some("from message".to_string()),
            None,
        );
        assert_eq!(err.user_message(), "from response");
        assert_eq!(err.message, "from info");

        let err = SdkError::from_fields(None, None, Some("user declined".to_string()), None);
        assert_eq!(err.user_message(), "user declined");

        let err = SdkError::from_fields(None, None, None, Some("plain string".to_string()));
        assert_eq!(err.user_message(), "plain string");
    }

    #[test]
    fn test_from_fields_skips_blank_values() {
        let err = SdkError::from_fields(Some("  ".to_string()), Some(String::new()), None, None);
        assert_eq!(err.detail, None);
        assert_eq!(err.user_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_report_message() {
        let err = WalletError::ProviderUnavailable("eternl".to_string());
        assert_eq!(
            report_message("Failed to connect wallet", &err),
            "Failed to connect wallet: eternl wallet is not available."
        );
        assert_eq!(
            report_message("", &WalletError::NoUsedAddress),
            "An error occurred: wallet reported no used addresses"
        );
    }
}
