//! Application Context
//!
//! Shared state provided via Leptos Context API: the marketplace controller,
//! the overlay store and the catalog storage. All domain changes go through
//! [`AppContext::dispatch`].

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use closet_core::{Action, KeyValueStore, Marketplace, Outcome, Services, SimulatedLocker};

use crate::services;
use crate::store::{UiStateStoreFields, UiStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Every piece of domain state
    pub market: RwSignal<Marketplace>,
    /// Which overlays are open
    pub ui: UiStore,
    /// Catalog storage, opened once at startup
    storage: StoredValue<Box<dyn KeyValueStore>, LocalStorage>,
}

impl AppContext {
    pub fn new(market: RwSignal<Marketplace>, ui: UiStore, storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            market,
            ui,
            storage: StoredValue::new_local(storage),
        }
    }

    /// Apply an action to the marketplace, then react to its outcome
    pub fn dispatch(&self, action: Action) -> Result<Outcome, String> {
        let market = self.market;
        let result = self.storage.try_update_value(|storage| {
            let mut locker = SimulatedLocker::new();
            let mut services = Services {
                storage: storage.as_mut(),
                locker: &mut locker,
            };
            market.try_update(|market| market.dispatch(action, &mut services))
        });

        let outcome = match result.flatten() {
            Some(Ok(outcome)) => outcome,
            Some(Err(e)) => {
                log::warn!("[APP] Action failed: {}", e);
                return Err(e.to_string());
            }
            None => return Err("marketplace is gone".to_string()),
        };
        self.follow_up(&outcome);
        Ok(outcome)
    }

    /// Dispatch where failure only needs logging
    pub fn send(&self, action: Action) {
        let _ = self.dispatch(action);
    }

    fn follow_up(&self, outcome: &Outcome) {
        let ui = self.ui;
        match outcome {
            Outcome::LoginRequired => ui.show_auth().set(true),
            Outcome::CheckedOut { item, open_locker_after } => {
                log::info!("[APP] Checked out {}, opening locker", item);
                let delay = u32::try_from(open_locker_after.as_millis()).unwrap_or(u32::MAX);
                Timeout::new(delay, move || ui.show_locker().set(true)).forget();
            }
            Outcome::Listed { item } => {
                log::info!("[APP] Listed {}", item);
                ui.show_listing().set(false);
                services::scroll_to("marketplace");
            }
            Outcome::Updated | Outcome::Collected { .. } => {}
        }
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
