//! Item Grid Component
//!
//! Cards for the visible items, or an empty state with a reset action.

use leptos::prelude::*;

use closet_core::{Action, Item, ViewMode};

use crate::context::use_app;
use crate::format::euro;

/// One marketplace card
#[component]
fn ItemCard(item: Item) -> impl IntoView {
    let app = use_app();
    let id = item.id;
    let mode = move || app.market.with(|m| m.mode());
    let is_gala = item.has_tag("gala");
    let price_rent = item.price_rent;
    let price_buy = item.price_buy;
    let deposit = item.deposit;

    view! {
        <div class="item-card" on:click=move |_| app.send(Action::SelectItem(id))>
            <div class="item-card-media">
                <img src=item.image.clone() alt=item.title.clone() />
                <div class="item-card-badges">
                    <Show when=move || is_gala>
                        <span class="badge gala">"Gala Edit"</span>
                    </Show>
                    <Show when=move || mode() == ViewMode::Rent>
                        <span class="badge deposit">"Dep: " {euro(deposit)}</span>
                    </Show>
                </div>
                <button class="item-card-action">{move || mode().card_action()}</button>
            </div>
            <div class="item-card-body">
                <div>
                    <h3>{item.title.clone()}</h3>
                    <p class="item-card-seller">{format!("{} • {}", item.seller, item.seller_year)}</p>
                </div>
                <div class="item-card-price">
                    <p class="price">
                        {move || euro(match mode() {
                            ViewMode::Rent => price_rent,
                            ViewMode::Buy => price_buy,
                        })}
                    </p>
                    <p class="price-caption">{move || mode().price_caption()}</p>
                </div>
            </div>
        </div>
    }
}

/// Grid of visible items
#[component]
pub fn ItemGrid() -> impl IntoView {
    let app = use_app();
    let visible = move || {
        app.market.with(|m| m.visible_items().into_iter().cloned().collect::<Vec<_>>())
    };
    let is_empty = move || app.market.with(|m| m.visible_items().is_empty());

    view! {
        <Show
            when=move || !is_empty()
            fallback=move || view! {
                <div class="empty-state">
                    <h3>"No items match your search"</h3>
                    <button on:click=move |_| app.send(Action::ResetFilter)>"Show all items"</button>
                </div>
            }
        >
            <div class="item-grid">
                <For
                    each=visible
                    key=|item| item.id
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </div>
        </Show>
    }
}
