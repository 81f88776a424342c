//! UI State Store
//!
//! Which overlays are open. Domain state lives in the marketplace controller;
//! this only tracks presentation.

use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Login modal
    pub show_auth: bool,
    /// "List an Item" form
    pub show_listing: bool,
    /// Locker hub
    pub show_locker: bool,
    /// Mobile navigation dropdown
    pub menu_open: bool,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;
