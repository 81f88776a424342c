//! Product Modal Component
//!
//! Item details with the checkout breakdown for the current mode.

use leptos::prelude::*;

use closet_core::{Action, Item, ViewMode};

use crate::context::use_app;
use crate::format::{euro, euro_cents};

#[component]
fn ProductDetails(item: Item) -> impl IntoView {
    let app = use_app();
    let id = item.id;
    let seller = item.seller.clone();
    let quote = app.market.with_untracked(|m| m.quote_for(&item));

    view! {
        <div class="modal-backdrop" on:click=move |_| app.send(Action::CloseItem)>
            <div class="modal product-modal" on:click=|ev| ev.stop_propagation()>
                <div class="product-media">
                    <img src=item.image.clone() alt=item.title.clone() />
                    <p class="product-category">{item.category.as_str()}</p>
                    <div class="product-tags">
                        {item.tags.iter().map(|tag| view! { <span class="tag">{tag.clone()}</span> }).collect_view()}
                    </div>
                </div>

                <div class="product-content">
                    <button class="modal-close" on:click=move |_| app.send(Action::CloseItem)>"✕"</button>
                    <h2>{item.title.clone()}</h2>
                    <div class="product-seller">
                        <button on:click=move |_| app.send(Action::ViewSeller(seller.clone()))>
                            "👤 " {item.seller.clone()}
                        </button>
                        <span>{item.seller_year.clone()}</span>
                    </div>
                    <p class="product-description">"\"" {item.description.clone()} "\""</p>
                    <p class="product-meta">{format!("Size {} • {}", item.size, item.condition.as_str())}</p>

                    <div class="price-breakdown">
                        <div class="price-line">
                            <span>{quote.price_label()}</span>
                            <span>{euro(quote.base)}</span>
                        </div>
                        <Show when=move || quote.mode == ViewMode::Rent>
                            <div class="price-line">
                                <span>"Security Deposit " <span class="hint" title="Refunded upon return">"?"</span></span>
                                <span>{euro(quote.deposit_due)}</span>
                            </div>
                        </Show>
                        <div class="price-line">
                            <span>{quote.fee_label()}</span>
                            <span>{euro_cents(quote.fee)}</span>
                        </div>
                        <div class="price-line total">
                            <span>"Total Due"</span>
                            <span>{euro_cents(quote.total)}</span>
                        </div>
                    </div>

                    <button class="checkout-btn" on:click=move |_| app.send(Action::Checkout(id))>
                        {quote.action_label()} " →"
                    </button>
                    <div class="trust-row">
                        <span>"Verified Student"</span>
                        <span>"Secure Locker"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Shown while an item is selected
#[component]
pub fn ProductModal() -> impl IntoView {
    let app = use_app();
    let selected = move || app.market.with(|m| m.selected_item().cloned());

    view! {
        {move || selected().map(|item| view! { <ProductDetails item=item /> })}
    }
}
