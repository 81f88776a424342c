//! Marketplace Controller
//!
//! Owns every piece of application state. The UI sends [`Action`]s and reacts
//! to the returned [`Outcome`]; side effects go through [`Services`].

use std::time::Duration;

use chrono::Utc;

use crate::catalog::Catalog;
use crate::config::ClosetConfig;
use crate::error::{ClosetError, Result};
use crate::filter::{filter_items, FilterState, ViewMode};
use crate::listing::ListingDraft;
use crate::model::{Item, ItemId};
use crate::pricing::{quote, Quote};
use crate::rentals::{LockerActuator, RentalTracker};
use crate::seed::seed_items;
use crate::seller::SellerProfile;
use crate::session::{Session, SessionGate};
use crate::storage::KeyValueStore;

/// External capabilities an action may touch
pub struct Services<'a> {
    pub storage: &'a mut dyn KeyValueStore,
    pub locker: &'a mut dyn LockerActuator,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetQuery(String),
    SetFilter(String),
    /// Empty-state button: show the full catalog again
    ResetFilter,
    SetMode(ViewMode),
    SelectItem(ItemId),
    CloseItem,
    ViewSeller(String),
    CloseSeller,
    EmailEdited,
    Authenticate { email: String },
    Checkout(ItemId),
    SubmitListing(ListingDraft),
    SimulatePickup(ItemId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Updated,
    /// Action needs a session; show the login flow
    LoginRequired,
    /// Open the locker dashboard once the delay has passed
    CheckedOut { item: ItemId, open_locker_after: Duration },
    /// New listing is first in the catalog and the filter is back to "all"
    Listed { item: ItemId },
    Collected { item: ItemId },
}

#[derive(Debug, Clone)]
pub struct Marketplace {
    config: ClosetConfig,
    catalog: Catalog,
    filter: FilterState,
    mode: ViewMode,
    gate: SessionGate,
    rentals: RentalTracker,
    selected_item: Option<ItemId>,
    selected_seller: Option<String>,
}

impl Marketplace {
    pub fn new(config: ClosetConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;
        let gate = SessionGate::new(&config.email_domain)?;
        Ok(Self {
            config,
            catalog,
            filter: FilterState::default(),
            mode: ViewMode::default(),
            gate,
            rentals: RentalTracker::new(),
            selected_item: None,
            selected_seller: None,
        })
    }

    /// Start from the persisted catalog, or the seed list
    pub fn load(config: ClosetConfig, storage: &dyn KeyValueStore) -> Result<Self> {
        let catalog = Catalog::load(storage, &config.storage_key, seed_items());
        Self::new(config, catalog)
    }

    // ========================
    // Read access
    // ========================

    pub fn config(&self) -> &ClosetConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    pub fn session(&self) -> &Session {
        self.gate.session()
    }

    pub fn rentals(&self) -> &RentalTracker {
        &self.rentals
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        filter_items(self.catalog.items(), &self.filter)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_item.and_then(|id| self.catalog.get(id))
    }

    pub fn quote_for(&self, item: &Item) -> Quote {
        quote(item, self.mode, &self.config.fees)
    }

    pub fn selected_seller(&self) -> Option<SellerProfile> {
        self.selected_seller
            .as_deref()
            .map(|name| SellerProfile::from_catalog(name, self.catalog.items()))
    }

    // ========================
    // Updates
    // ========================

    pub fn dispatch(&mut self, action: Action, services: &mut Services<'_>) -> Result<Outcome> {
        match action {
            Action::SetQuery(query) => self.filter.set_query(&query),
            Action::SetFilter(value) => self.filter.set_category(&value),
            Action::ResetFilter => self.filter.reset(),
            Action::SetMode(mode) => self.mode = mode,
            Action::SelectItem(id) => {
                if self.catalog.get(id).is_none() {
                    return Err(ClosetError::ItemNotFound(id));
                }
                self.selected_item = Some(id);
            }
            Action::CloseItem => self.selected_item = None,
            Action::ViewSeller(name) => self.selected_seller = Some(name),
            Action::CloseSeller => self.selected_seller = None,
            Action::EmailEdited => self.gate.email_edited(),
            Action::Authenticate { email } => {
                self.gate.authenticate(&email)?;
            }
            Action::Checkout(id) => return self.checkout(id),
            Action::SubmitListing(draft) => return self.submit_listing(draft, services),
            Action::SimulatePickup(id) => {
                self.rentals.collect(id, services.locker, Utc::now())?;
                return Ok(Outcome::Collected { item: id });
            }
        }
        Ok(Outcome::Updated)
    }

    fn checkout(&mut self, id: ItemId) -> Result<Outcome> {
        // Either way the product view closes
        self.selected_item = None;

        if !self.gate.is_authenticated() {
            log::info!("[MARKET] Checkout of {} needs login", id);
            return Ok(Outcome::LoginRequired);
        }

        let item = self.catalog.get(id).cloned().ok_or(ClosetError::ItemNotFound(id))?;
        self.rentals.check_in(item, self.mode, Utc::now());
        Ok(Outcome::CheckedOut {
            item: id,
            open_locker_after: self.config.locker_delay(),
        })
    }

    fn submit_listing(&mut self, draft: ListingDraft, services: &mut Services<'_>) -> Result<Outcome> {
        if !self.gate.is_authenticated() {
            return Ok(Outcome::LoginRequired);
        }

        let listing = draft.validate()?;
        let id = self.catalog.next_id()?;
        let item = listing.into_item(id, &self.config);
        log::info!("[MARKET] Listed {} ({}, deposit {})", item.title, item.category, item.deposit);
        self.catalog.prepend(item);

        if let Err(e) = self.catalog.persist(services.storage, &self.config.storage_key) {
            log::warn!("[MARKET] Catalog not persisted: {}", e);
        }

        self.filter.set_category("all");
        Ok(Outcome::Listed { item: id })
    }
}
