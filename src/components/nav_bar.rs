//! Navigation Bar Component
//!
//! Logo, search box, section links and the session area (login button, or
//! list/locker/avatar once authenticated).

use leptos::prelude::*;

use closet_core::Action;

use crate::context::use_app;
use crate::services;
use crate::store::UiStateStoreFields;

/// Search input; typing drops the category filter
#[component]
fn SearchBox() -> impl IntoView {
    let app = use_app();
    let query = move || app.market.with(|m| m.filter().query.clone());

    view! {
        <div class="search-box">
            <input
                type="text"
                placeholder="Search..."
                prop:value=query
                on:input=move |ev| app.send(Action::SetQuery(event_target_value(&ev)))
            />
        </div>
    }
}

/// Right side of the nav: depends on the session
#[component]
fn SessionArea() -> impl IntoView {
    let app = use_app();
    let ui = app.ui;
    let authenticated = move || app.market.with(|m| m.session().authenticated);
    let has_rentals = move || app.market.with(|m| !m.rentals().is_empty());
    let initials = move || app.market.with(|m| m.session().initials());

    view! {
        <Show
            when=authenticated
            fallback=move || view! {
                <button class="connect-btn" on:click=move |_| ui.show_auth().set(true)>
                    "Connect ID"
                </button>
            }
        >
            <div class="session-area">
                <button class="list-btn" on:click=move |_| ui.show_listing().set(true)>
                    "+ List Item"
                </button>
                <button class="locker-btn" title="Locker Hub" on:click=move |_| ui.show_locker().set(true)>
                    "🔒"
                    <Show when=has_rentals>
                        <span class="locker-badge"></span>
                    </Show>
                </button>
                <div class="avatar" title="Student Verified">{initials}</div>
            </div>
        </Show>
    }
}

/// Top navigation bar
#[component]
pub fn NavBar() -> impl IntoView {
    let app = use_app();
    let ui = app.ui;
    let rental_count = move || app.market.with(|m| m.rentals().entries().len());

    view! {
        <nav class="nav">
            <div class="nav-brand" on:click=move |_| services::scroll_to_top()>
                <span class="nav-title">"CampusCloset"</span>
                <span class="nav-tagline">"Closet Meets Campus"</span>
            </div>

            <div class="nav-desktop">
                <SearchBox />
                <a href="#collections">"Collections"</a>
                <a href="#marketplace">"Marketplace"</a>
                <a href="#how-it-works">"Locker System"</a>
                <SessionArea />
            </div>

            <button class="nav-menu-toggle" on:click=move |_| ui.menu_open().update(|open| *open = !*open)>
                {move || if ui.menu_open().get() { "✕" } else { "☰" }}
            </button>

            <Show when=move || ui.menu_open().get()>
                <div class="nav-mobile">
                    <SearchBox />
                    <a href="#collections" on:click=move |_| ui.menu_open().set(false)>"Collections"</a>
                    <a href="#marketplace" on:click=move |_| ui.menu_open().set(false)>"Marketplace"</a>
                    <a href="#how-it-works" on:click=move |_| ui.menu_open().set(false)>"Locker System"</a>
                    <button on:click=move |_| {
                        ui.menu_open().set(false);
                        ui.show_locker().set(true);
                    }>
                        "My Locker "
                        <Show when=move || { rental_count() > 0 }>
                            <span class="count-badge">{rental_count}</span>
                        </Show>
                    </button>
                </div>
            </Show>
        </nav>
    }
}
