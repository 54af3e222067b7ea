//! # Page Configuration
//!
//! A browser page has no environment, so settings come from the URL query
//! string. The loader takes a lookup closure rather than reading the location
//! itself; `wallet-web` passes its query-parameter helper, tests pass a map.
//!
//! | Key           | Meaning                          | Default |
//! |---------------|----------------------------------|---------|
//! | `wallet`      | only offer this provider         | all     |
//! | `discovery`   | `mount` or `poll`                | `mount` |
//! | `interval_ms` | poll interval in milliseconds    | 3000    |
//!
//! ```rust
//! use lib_wallet::config::{DiscoveryPolicy, WalletConfig};
//!
//! let config = WalletConfig::from_query(|key| match key {
//!     "discovery" => Some("poll".to_string()),
//!     _ => None,
//! });
//! assert_eq!(config.discovery, DiscoveryPolicy::Poll { interval_ms: 3000 });
//! ```

use thiserror::Error;

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 3_000;
pub const MIN_POLL_INTERVAL_MS: u32 = 500;
pub const MAX_POLL_INTERVAL_MS: u32 = 60_000;

/// When wallet discovery runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiscoveryPolicy {
    /// Once, when the page mounts.
    #[default]
    OnMount,
    /// On mount and then every `interval_ms` while no wallet is connected.
    Poll { interval_ms: u32 },
}

/// Malformed configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown discovery policy '{0}' (expected 'mount' or 'poll')")]
    UnknownDiscovery(String),

    #[error("interval_ms must be a whole number of milliseconds: {0}")]
    InvalidInterval(String),

    #[error("interval_ms must be between 500 and 60000, got {0}")]
    IntervalOutOfRange(u32),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletConfig {
    /// Narrow discovery to this provider name (case-insensitive)
    pub preferred_wallet: Option<String>,
    pub discovery: DiscoveryPolicy,
}

impl WalletConfig {
    /// Strict loader: the first malformed value is an error.
    ///
    /// `interval_ms` is only read under the `poll` policy.
    pub fn try_from_query<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discovery = if parse_polling(lookup("discovery").as_deref())? {
            DiscoveryPolicy::Poll {
                interval_ms: parse_interval(lookup("interval_ms").as_deref())?,
            }
        } else {
            DiscoveryPolicy::OnMount
        };

        let config = Self {
            preferred_wallet: parse_wallet(lookup("wallet")),
            discovery,
        };
        config.validate()?;
        Ok(config)
    }

    /// Lenient loader used by the page: malformed values are logged and the
    /// offending setting falls back to its default.
    pub fn from_query<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let polling = parse_polling(lookup("discovery").as_deref()).unwrap_or_else(|err| {
            log::warn!("Ignoring discovery setting: {}", err);
            false
        });

        let discovery = if polling {
            let interval_ms =
                parse_interval(lookup("interval_ms").as_deref()).unwrap_or_else(|err| {
                    log::warn!(
                        "Ignoring interval_ms, using {}ms: {}",
                        DEFAULT_POLL_INTERVAL_MS,
                        err
                    );
                    DEFAULT_POLL_INTERVAL_MS
                });
            DiscoveryPolicy::Poll { interval_ms }
        } else {
            DiscoveryPolicy::OnMount
        };

        Self {
            preferred_wallet: parse_wallet(lookup("wallet")),
            discovery,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let DiscoveryPolicy::Poll { interval_ms } = self.discovery {
            if !(MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&interval_ms) {
                return Err(ConfigError::IntervalOutOfRange(interval_ms));
            }
        }
        Ok(())
    }

    /// Poll interval, if discovery polls at all.
    pub fn poll_interval_ms(&self) -> Option<u32> {
        match self.discovery {
            DiscoveryPolicy::OnMount => None,
            DiscoveryPolicy::Poll { interval_ms } => Some(interval_ms),
        }
    }
}

fn parse_wallet(raw: Option<String>) -> Option<String> {
    raw.map(|w| w.trim().to_string()).filter(|w| !w.is_empty())
}

/// `true` for `poll`, `false` for `mount` or an absent value.
fn parse_polling(raw: Option<&str>) -> Result<bool, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") | Some("mount") => Ok(false),
        Some("poll") => Ok(true),
        Some(other) => Err(ConfigError::UnknownDiscovery(other.to_string())),
    }
}

fn parse_interval(raw: Option<&str>) -> Result<u32, ConfigError> {
    let interval_ms = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_POLL_INTERVAL_MS),
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidInterval(value.to_string()))?,
    };

    if !(MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&interval_ms) {
        return Err(ConfigError::IntervalOutOfRange(interval_ms));
    }
    Ok(interval_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_query_is_empty() {
        let config = WalletConfig::from_query(query(&[]));
        assert_eq!(config, WalletConfig::default());
        assert_eq!(config.poll_interval_ms(), None);
    }

    #[test]
    fn test_parses_all_keys() {
        let config = WalletConfig::try_from_query(query(&[
            ("wallet", " eternl "),
            ("discovery", "poll"),
            ("interval_ms", "1500"),
        ]))
        .unwrap();
        assert_eq!(config.preferred_wallet.as_deref(), Some("eternl"));
        assert_eq!(config.discovery, DiscoveryPolicy::Poll { interval_ms: 1500 });
    }

    #[test]
    fn test_interval_ignored_for_mount_policy() {
        let config = WalletConfig::try_from_query(query(&[("interval_ms", "1000")])).unwrap();
        assert_eq!(config.discovery, DiscoveryPolicy::OnMount);

        // not parsed at all unless polling
        let config = WalletConfig::try_from_query(query(&[
            ("discovery", "mount"),
            ("interval_ms", "fast"),
        ]))
        .unwrap();
        assert_eq!(config.discovery, DiscoveryPolicy::OnMount);
    }

    #[test]
    fn test_strict_loader_rejects_bad_values() {
        assert_eq!(
            WalletConfig::try_from_query(query(&[("discovery", "sometimes")])),
            Err(ConfigError::UnknownDiscovery("sometimes".to_string()))
        );
        assert_eq!(
            WalletConfig::try_from_query(query(&[("discovery", "poll"), ("interval_ms", "fast")])),
            Err(ConfigError::InvalidInterval("fast".to_string()))
        );
        assert_eq!(
            WalletConfig::try_from_query(query(&[("discovery", "poll"), ("interval_ms", "10")])),
            Err(ConfigError::IntervalOutOfRange(10))
        );
    }

    #[test]
    fn test_lenient_loader_falls_back_per_setting() {
        let config = WalletConfig::from_query(query(&[
            ("wallet", "lace"),
            ("discovery", "poll"),
            ("interval_ms", "999999"),
        ]));
        assert_eq!(config.preferred_wallet.as_deref(), Some("lace"));
        assert_eq!(
            config.discovery,
            DiscoveryPolicy::Poll {
                interval_ms: DEFAULT_POLL_INTERVAL_MS
            }
        );

        let config =
            WalletConfig::from_query(query(&[("discovery", "poll"), ("interval_ms", "fast")]));
        assert_eq!(
            config.discovery,
            DiscoveryPolicy::Poll {
                interval_ms: DEFAULT_POLL_INTERVAL_MS
            }
        );
        assert_eq!(config.poll_interval_ms(), Some(3000));
    }

    #[test]
    fn test_lenient_loader_ignores_unknown_policy() {
        let config = WalletConfig::from_query(query(&[
            ("wallet", "eternl"),
            ("discovery", "sometimes"),
            ("interval_ms", "1000"),
        ]));
        assert_eq!(config.preferred_wallet.as_deref(), Some("eternl"));
        assert_eq!(config.discovery, DiscoveryPolicy::OnMount);
    }
}
