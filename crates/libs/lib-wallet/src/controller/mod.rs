//! # Wallet Controller
//!
//! Single owner of the page's wallet state: discovered providers, the
//! connection status, the session handle, the address, the asset collection
//! and the one visible error message.
//!
//! ## Update Discipline
//!
//! Every mutation runs through a private `apply` step, which hands the
//! change a `&mut` to the state and then publishes a fresh [`WalletSnapshot`]
//! to every subscriber. The Leptos front end subscribes once and mirrors the
//! snapshot into a signal.
//!
//! ## Suspending Operations
//!
//! `connect` and `fetch_assets` await the SDK. Each is split into three steps
//! so the UI can drive them from `spawn_local` without holding a borrow across
//! the await:
//!
//! 1. `begin_*` records intent and returns a ticket tagged with the current
//!    request generation,
//! 2. the caller awaits the SDK (see [`WalletController::establish`]),
//! 3. `finish_*` applies the result only if the ticket is still current.
//!
//! A new connect attempt or a disconnect bumps the generation, so results
//! still in flight from before are dropped instead of overwriting newer state.
//! [`WalletController::connect`] and [`WalletController::fetch_assets`] run
//! all three steps in sequence for callers that own the controller outright.

use shared::dto::wallet::{Asset, ProviderDescriptor};

use crate::config::WalletConfig;
use crate::error::{report_message, Result, WalletError};
use crate::sdk::{WalletSdk, WalletSession};


pub const CONNECT_ERROR_PREFIX: &str = "Failed to connect wallet";
pub const ASSETS_ERROR_PREFIX: &str = "Failed to fetch assets";

/// Connection lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// What happened to a finished request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The result was stored.
    Applied,
    /// A newer request or a disconnect superseded this one; nothing changed.
    Stale,
    /// There was no session to query; nothing was requested.
    Skipped,
}

/// Proof of an accepted connect attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectTicket {
    generation: u64,
    provider: String,
}

impl ConnectTicket {
    /// Provider name as discovery reported it.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Proof of an accepted asset fetch, carrying the session to query.
#[derive(Clone, Debug)]
pub struct AssetTicket<T> {
    generation: u64,
    request: u64,
    session: T,
}

impl<T> AssetTicket<T> {
    pub fn session(&self) -> &T {
        &self.session
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// One connect button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectOption {
    pub provider: ProviderDescriptor,
    /// This provider's connect request is in flight
    pub pending: bool,
    /// Buttons are disabled while any connect is in flight
    pub enabled: bool,
}

impl ConnectOption {
    pub fn label(&self) -> String {
        if self.pending {
            "Connecting...".to_string()
        } else {
            format!("Connect {}", display_name(&self.provider.name))
        }
    }
}

/// Immutable copy of the state, published after every change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletSnapshot {
    pub providers: Vec<ProviderDescriptor>,
    pub selected_provider: Option<String>,
    pub status: ConnectionStatus,
    pub address: Option<String>,
    pub assets: Option<Vec<Asset>>,
    pub loading_assets: bool,
    pub error: Option<String>,
}

impl WalletSnapshot {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    pub fn has_providers(&self) -> bool {
        !self.providers.is_empty()
    }

    /// One option per discovered provider, in discovery order.
    pub fn connect_options(&self) -> Vec<ConnectOption> {
        let connecting = self.status == ConnectionStatus::Connecting;
        self.providers
            .iter()
            .map(|provider| ConnectOption {
                provider: provider.clone(),
                pending: connecting
                    && self
                        .selected_provider
                        .as_deref()
                        .is_some_and(|name| provider.matches(name)),
                enabled: !connecting,
            })
            .collect()
    }
}

struct ControllerState<T> {
    providers: Vec<ProviderDescriptor>,
    selected_provider: Option<String>,
    status: ConnectionStatus,
    session: Option<T>,
    address: Option<String>,
    assets: Option<Vec<Asset>>,
    loading_assets: bool,
    error: Option<String>,
    generation: u64,
    asset_request: u64,
}

impl<T> Default for ControllerState<T> {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
            selected_provider: None,
            status: ConnectionStatus::Disconnected,
            session: None,
            address: None,
            assets: None,
            loading_assets: false,
            error: None,
            generation: 0,
            asset_request: 0,
        }
    }
}

impl<T> ControllerState<T> {
    fn report(&mut self, prefix: &str, err: &WalletError) {
        let message = report_message(prefix, err);
        log::error!("{}", message);
        self.error = Some(message);
    }

    /// Drop the connection and everything derived from it.
    fn clear_connection(&mut self) {
        self.status = ConnectionStatus::Disconnected;
        self.session = None;
        self.address = None;
        self.assets = None;
        self.loading_assets = false;
        self.selected_provider = None;
    }
}

type Subscriber = Box<dyn Fn(&WalletSnapshot)>;

pub struct WalletController<S: WalletSdk> {
    sdk: S,
    config: WalletConfig,
    state: ControllerState<S::Session>,
    subscribers: Vec<Subscriber>,
    poller_claimed: bool,
}

impl<S: WalletSdk> WalletController<S> {
    pub fn new(sdk: S, config: WalletConfig) -> Self {
        Self {
            sdk,
            config,
            state: ControllerState::default(),
            subscribers: Vec::new(),
            poller_claimed: false,
        }
    }

    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Register a listener; it immediately receives the current snapshot.
    pub fn subscribe(&mut self, subscriber: impl Fn(&WalletSnapshot) + 'static) {
        subscriber(&self.snapshot());
        self.subscribers.push(Box::new(subscriber));
    }

    fn apply<R>(&mut self, change: impl FnOnce(&mut ControllerState<S::Session>) -> R) -> R {
        let result = change(&mut self.state);
        if !self.subscribers.is_empty() {
            let snapshot = self.snapshot();
            for subscriber in &self.subscribers {
                subscriber(&snapshot);
            }
        }
        result
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        WalletSnapshot {
            providers: self.state.providers.clone(),
            selected_provider: self.state.selected_provider.clone(),
            status: self.state.status,
            address: self.state.address.clone(),
            assets: self.state.assets.clone(),
            loading_assets: self.state.loading_assets,
            error: self.state.error.clone(),
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.state.status
    }

    pub fn is_connected(&self) -> bool {
        self.state.status == ConnectionStatus::Connected
    }

    pub fn providers(&self) -> &[ProviderDescriptor] {
        &self.state.providers
    }

    pub fn has_providers(&self) -> bool {
        !self.state.providers.is_empty()
    }

    pub fn connect_options(&self) -> Vec<ConnectOption> {
        self.snapshot().connect_options()
    }

    pub fn selected_provider(&self) -> Option<&str> {
        self.state.selected_provider.as_deref()
    }

    pub fn session(&self) -> Option<&S::Session> {
        self.state.session.as_ref()
    }

    pub fn address(&self) -> Option<&str> {
        self.state.address.as_deref()
    }

    pub fn assets(&self) -> Option<&[Asset]> {
        self.state.assets.as_deref()
    }

    pub fn is_loading_assets(&self) -> bool {
        self.state.loading_assets
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// True when the configured cadence asks for another discovery pass now.
    pub fn should_poll_discovery(&self) -> bool {
        self.config.poll_interval_ms().is_some()
            && self.state.status == ConnectionStatus::Disconnected
    }

    /// Interval for the discovery timer. Returns it at most once per
    /// controller, and never under the mount-only policy, so only one timer
    /// loop ever runs.
    pub fn claim_discovery_poller(&mut self) -> Option<u32> {
        if self.poller_claimed {
            return None;
        }
        let interval_ms = self.config.poll_interval_ms()?;
        self.poller_claimed = true;
        Some(interval_ms)
    }

    // -- Wallet Discovery --

    /// Re-enumerate installed extensions, narrowed to the preferred wallet if
    /// one is configured.
    pub fn refresh_providers(&mut self) -> &[ProviderDescriptor] {
        let mut providers = self.sdk.list_providers();
        if let Some(preferred) = self.config.preferred_wallet.as_deref() {
            providers.retain(|p| p.matches(preferred));
        }

        if providers != self.state.providers {
            log::info!(
                "Discovered {} wallet provider(s): {:?}",
                providers.len(),
                providers.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
            );
            self.apply(|state| state.providers = providers);
        }
        &self.state.providers
    }

    // -- Connection Manager --

    /// Accept a connect attempt for `name`.
    ///
    /// Unknown providers are reported and rejected without touching the
    /// connection. Otherwise the status becomes `Connecting`, the error is
    /// cleared, and any earlier connection or pending request is superseded.
    pub fn begin_connect(&mut self, name: &str) -> Result<ConnectTicket> {
        let provider = self
            .state
            .providers
            .iter()
            .find(|p| p.matches(name))
            .map(|p| p.name.clone());

        let Some(provider) = provider else {
            let err = WalletError::ProviderUnavailable(name.to_string());
            self.apply(|state| state.report(CONNECT_ERROR_PREFIX, &err));
            return Err(err);
        };

        log::info!("Connecting to {}", provider);
        let ticket = self.apply(|state| {
            state.generation += 1;
            state.clear_connection();
            state.status = ConnectionStatus::Connecting;
            state.selected_provider = Some(provider.clone());
            state.error = None;
            ConnectTicket {
                generation: state.generation,
                provider,
            }
        });
        Ok(ticket)
    }

    /// Enable the provider and read its first used address.
    pub async fn establish(sdk: &S, provider: &str) -> Result<(S::Session, String)> {
        let session = sdk.enable(provider).await?;
        let address = session
            .get_used_addresses()
            .await?
            .into_iter()
            .next()
            .ok_or(WalletError::NoUsedAddress)?;
        Ok((session, address))
    }

    /// Apply the result of [`WalletController::establish`] for `ticket`.
    pub fn finish_connect(
        &mut self,
        ticket: ConnectTicket,
        result: Result<(S::Session, String)>,
    ) -> Result<Outcome> {
        if ticket.generation != self.state.generation {
            log::debug!(
                "Dropping superseded connect result for {} (generation {} < {})",
                ticket.provider,
                ticket.generation,
                self.state.generation
            );
            return Ok(Outcome::Stale);
        }

        match result {
            Ok((session, address)) => {
                log::info!("Connected to {} at {}", ticket.provider, address);
                self.apply(|state| {
                    state.session = Some(session);
                    state.address = Some(address);
                    state.status = ConnectionStatus::Connected;
                    state.error = None;
                });
                Ok(Outcome::Applied)
            }
            Err(err) => {
                self.apply(|state| {
                    state.clear_connection();
                    state.report(CONNECT_ERROR_PREFIX, &err);
                });
                Err(err)
            }
        }
    }

    /// Connect to `name` and wait for the outcome.
    pub async fn connect(&mut self, name: &str) -> Result<Outcome> {
        let ticket = self.begin_connect(name)?;
        let result = Self::establish(&self.sdk, ticket.provider()).await;
        self.finish_connect(ticket, result)
    }

    /// Forget the session and everything derived from it. Pending requests
    /// become stale.
    pub fn disconnect(&mut self) {
        log::info!("Disconnecting wallet");
        self.apply(|state| {
            state.generation += 1;
            state.clear_connection();
            state.error = None;
        });
    }

    // -- Asset Viewer --

    /// Accept an asset fetch. Returns `None`, changing nothing, when there is
    /// no session. A later fetch supersedes this one.
    pub fn begin_fetch_assets(&mut self) -> Option<AssetTicket<S::Session>> {
        let session = self.state.session.clone()?;
        let ticket = self.apply(|state| {
            state.asset_request += 1;
            state.loading_assets = true;
            AssetTicket {
                generation: state.generation,
                request: state.asset_request,
                session,
            }
        });
        Some(ticket)
    }

    /// Apply the result of `ticket.session().get_assets()`.
    pub fn finish_fetch_assets(
        &mut self,
        ticket: AssetTicket<S::Session>,
        result: Result<Vec<Asset>>,
    ) -> Outcome {
        if ticket.generation != self.state.generation
            || ticket.request != self.state.asset_request
            || self.state.session.is_none()
        {
            log::debug!(
                "Dropping superseded asset result (generation {}, request {})",
                ticket.generation,
                ticket.request
            );
            return Outcome::Stale;
        }

        match result {
            Ok(assets) => {
                log::info!("Fetched {} asset(s)", assets.len());
                self.apply(|state| {
                    state.assets = Some(assets);
                    state.loading_assets = false;
                    state.error = None;
                });
            }
            Err(err) => {
                self.apply(|state| {
                    state.loading_assets = false;
                    state.report(ASSETS_ERROR_PREFIX, &err);
                });
            }
        }
        Outcome::Applied
    }

    /// Fetch the full asset collection, replacing any earlier result.
    pub async fn fetch_assets(&mut self) -> Outcome {
        let Some(ticket) = self.begin_fetch_assets() else {
            return Outcome::Skipped;
        };
        let result = ticket.session().get_assets().await.map_err(WalletError::from);
        self.finish_fetch_assets(ticket, result)
    }

    // -- Error Reporter --

    /// Show `"<prefix>: <message>"` as the sole visible error.
    pub fn report_error(&mut self, prefix: &str, err: &WalletError) {
        self.apply(|state| state.report(prefix, err));
    }
}

/// Capitalize a provider id for button labels (`eternl` -> `Eternl`).
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
