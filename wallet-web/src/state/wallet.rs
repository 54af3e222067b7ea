//! Wallet state management
//!
//! The controller lives in a local `StoredValue` (its session handle wraps JS
//! objects and cannot leave the UI thread). It publishes every change into a
//! `RwSignal<WalletSnapshot>`, which is what views read.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_wallet::{WalletConfig, WalletController, WalletError, WalletSession, WalletSnapshot};

use crate::services::MeshSdk;
use crate::utils::url::get_query_param;

type Controller = WalletController<MeshSdk>;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    controller: StoredValue<Controller, LocalStorage>,
    pub snapshot: RwSignal<WalletSnapshot>,
}

impl WalletContext {
    pub fn new(sdk: MeshSdk, config: WalletConfig) -> Self {
        let snapshot = RwSignal::new(WalletSnapshot::default());
        let mut controller = WalletController::new(sdk, config);
        controller.subscribe(move |state| snapshot.set(state.clone()));

        Self {
            controller: StoredValue::new_local(controller),
            snapshot,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.snapshot.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.snapshot.with(|state| state.address.clone())
    }

    pub fn error(&self) -> Option<String> {
        self.snapshot.with(|state| state.error.clone())
    }

    pub fn preferred_wallet(&self) -> Option<String> {
        self.controller
            .try_with_value(|c| c.config().preferred_wallet.clone())
            .flatten()
    }

    pub fn refresh_providers(&self) {
        self.controller.update_value(|c| {
            c.refresh_providers();
        });
    }

    /// Re-run discovery on the configured interval while disconnected.
    /// Does nothing under the mount-only policy or if the timer already runs.
    pub fn start_discovery_polling(&self) {
        let Some(interval_ms) = self
            .controller
            .try_update_value(|c| c.claim_discovery_poller())
            .flatten()
        else {
            return;
        };

        log::info!("Polling for wallet extensions every {}ms", interval_ms);
        let controller = self.controller;
        leptos::task::spawn_local(async move {
            loop {
                TimeoutFuture::new(interval_ms).await;
                let alive = controller.try_update_value(|c| {
                    if c.should_poll_discovery() {
                        c.refresh_providers();
                    }
                });
                if alive.is_none() {
                    break;
                }
            }
        });
    }

    pub fn connect(&self, name: String) {
        let controller = self.controller;
        let Some((sdk, Ok(ticket))) =
            controller.try_update_value(|c| (*c.sdk(), c.begin_connect(&name)))
        else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = Controller::establish(&sdk, ticket.provider()).await;
            controller.try_update_value(|c| {
                // failures are already recorded in the controller's error state
                let _ = c.finish_connect(ticket, result);
            });
        });
    }

    pub fn fetch_assets(&self) {
        let controller = self.controller;
        let Some(Some(ticket)) = controller.try_update_value(|c| c.begin_fetch_assets()) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = ticket
                .session()
                .get_assets()
                .await
                .map_err(WalletError::from);
            controller.try_update_value(|c| c.finish_fetch_assets(ticket, result));
        });
    }

    pub fn disconnect(&self) {
        self.controller.update_value(|c| c.disconnect());
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let config = WalletConfig::from_query(get_query_param);
    let context = WalletContext::new(MeshSdk, config);
    context.start_discovery_polling();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
