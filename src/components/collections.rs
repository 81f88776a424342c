//! Collections Component
//!
//! Curated collection tiles. Picking one applies its filter and scrolls the
//! marketplace into view.

use leptos::prelude::*;

use closet_core::{Action, Collection};

use crate::context::use_app;
use crate::services;

#[component]
fn CollectionTile(collection: Collection, position: usize) -> impl IntoView {
    let app = use_app();
    let id = collection.id.clone();
    let target = collection.id.clone();
    let is_active = move || app.market.with(|m| m.filter().category.as_str() == target);

    let pick = move |_| {
        if app.dispatch(Action::SetFilter(id.clone())).is_ok() {
            services::scroll_to("marketplace");
        }
    };

    view! {
        <div
            class=move || if is_active() { "collection-tile active" } else { "collection-tile" }
            on:click=pick
        >
            <img src=collection.image alt="" />
            <div class="collection-overlay">
                <span class="collection-index">{format!("Collection {:02}", position + 1)}</span>
                <h3>{collection.label}</h3>
                <p>{collection.sub}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Collections() -> impl IntoView {
    let app = use_app();
    let collections = app.market.with_untracked(|m| m.config().collections.clone());

    view! {
        <section id="collections" class="collections">
            <h2>"Curated Collections"</h2>
            <p class="collections-sub">"Tailored for the ESCP calendar. From study sessions to the Winter Gala."</p>
            <div class="collection-grid">
                {collections
                    .into_iter()
                    .enumerate()
                    .map(|(position, collection)| view! { <CollectionTile collection=collection position=position /> })
                    .collect_view()}
            </div>
        </section>
    }
}
