//! Seller Modal Component
//!
//! Public seller card opened from a product's seller link.

use leptos::prelude::*;

use closet_core::{Action, SellerProfile};

use crate::context::use_app;

#[component]
fn SellerCard(profile: SellerProfile) -> impl IntoView {
    let app = use_app();

    view! {
        <div class="modal-backdrop" on:click=move |_| app.send(Action::CloseSeller)>
            <div class="modal seller-modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| app.send(Action::CloseSeller)>"✕"</button>
                <div class="seller-avatar">{profile.initial()}</div>
                <h2>{profile.name.clone()}</h2>
                <p class="modal-subtitle">{format!("Master 1 • {}", profile.batch)}</p>
                <span class="verified">"Verified Student"</span>

                <div class="seller-stats">
                    <div><p class="stat">{format!("{:.1}", profile.rating)}</p><p>"Rating"</p></div>
                    <div><p class="stat">{profile.listings}</p><p>"Listings"</p></div>
                    <div><p class="stat">{format!("{}%", profile.on_time_percent)}</p><p>"On Time"</p></div>
                </div>

                <h3>"Recent Reviews"</h3>
                {profile.reviews.iter().map(|review| view! {
                    <div class="review">
                        <div class="review-header">
                            <span class="review-author">{review.author}</span>
                            <span>{format!("★ {:.1}", review.rating)}</span>
                        </div>
                        <p>{format!("\"{}\"", review.text)}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SellerModal() -> impl IntoView {
    let app = use_app();
    let profile = move || app.market.with(|m| m.selected_seller());

    view! {
        {move || profile().map(|profile| view! { <SellerCard profile=profile /> })}
    }
}
