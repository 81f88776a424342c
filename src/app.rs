//! CampusCloset Frontend App
//!
//! Loads the marketplace, provides context and lays out the page: nav, hero,
//! collections, marketplace grid, locker explainer and the overlays.

use leptos::prelude::*;
use reactive_stores::Store;

use closet_core::{ClosetConfig, Marketplace};

use crate::components::{
    AuthModal, Collections, FilterBar, ItemGrid, ListingModal, LockerDashboard, NavBar,
    ProductModal, SellerModal,
};
use crate::context::AppContext;
use crate::services;
use crate::store::UiState;

#[component]
pub fn App() -> impl IntoView {
    let config = ClosetConfig::default();
    let storage = services::open_storage();

    match Marketplace::load(config, storage.as_ref()) {
        Ok(market) => {
            log::info!("[APP] Marketplace ready with {} items", market.catalog().len());
            provide_context(AppContext::new(
                RwSignal::new(market),
                Store::new(UiState::default()),
                storage,
            ));
            view! { <Storefront /> }.into_any()
        }
        Err(e) => {
            log::error!("[APP] Failed to start: {}", e);
            view! { <p class="fatal">"CampusCloset could not start: " {e.to_string()}</p> }.into_any()
        }
    }
}

#[component]
fn Storefront() -> impl IntoView {
    view! {
        <div class="page">
            <AuthModal />
            <ProductModal />
            <SellerModal />
            <LockerDashboard />
            <ListingModal />

            <div class="top-bar">
                <span>"ESCP Champerret Beta • Batch 2025"</span>
                <span class="top-bar-event">"Swap & Share Day: Oct 15th @ Student Lounge"</span>
            </div>

            <NavBar />

            <section class="hero">
                <h1>"Closet meets campus."</h1>
                <p>"Rent the gala gown, buy the interview blazer. Pick it up from a locker between classes."</p>
                <a class="hero-cta" href="#marketplace">"Browse the marketplace"</a>
            </section>

            <Collections />

            <section id="marketplace" class="marketplace">
                <FilterBar />
                <ItemGrid />
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2>"The Closed-Loop System"</h2>
                <ol>
                    <li>"Reserve an item with your student ID."</li>
                    <li>"We place it in a locker at Champerret Campus."</li>
                    <li>"Scan your pickup code and collect it."</li>
                </ol>
            </section>
        </div>
    }
}
