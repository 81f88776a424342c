//! Locker Dashboard Component
//!
//! Locker Hub: every acquired item with its pickup status and a simulated
//! scan button.

use chrono::Utc;
use leptos::prelude::*;

use closet_core::{Action, RentalEntry, ViewMode};

use crate::context::use_app;
use crate::format::expires_in;
use crate::store::UiStateStoreFields;

#[component]
fn RentalRow(entry: RentalEntry) -> impl IntoView {
    let app = use_app();
    let id = entry.item.id;
    let (scan_error, set_scan_error) = signal::<Option<String>>(None);

    let status = move || app.market.with(|m| m.rentals().get(id).map(|e| e.status));
    let is_ready = move || app.market.with(|m| m.rentals().get(id).is_some_and(|e| e.is_ready()));
    let expiry = expires_in(entry.code_expires_at(), Utc::now());
    let code = entry.pickup_code.clone();
    let acquired = match entry.mode {
        ViewMode::Rent => "Rented",
        ViewMode::Buy => "Bought",
    };

    let simulate_scan = move |_: web_sys::MouseEvent| {
        if let Err(msg) = app.dispatch(Action::SimulatePickup(id)) {
            set_scan_error.set(Some(msg));
        }
    };

    view! {
        <div class=move || if is_ready() { "rental-row ready" } else { "rental-row collected" }>
            <img src=entry.item.image.clone() alt="" />
            <div class="rental-info">
                <h3>{entry.item.title.clone()}</h3>
                <span class="rental-status">{move || status().map(|s| s.label()).unwrap_or_default()}</span>
                <span class="rental-mode">{acquired}</span>
                <Show
                    when=is_ready
                    fallback=|| view! { <p class="rental-note">"Picked up. Enjoy!"</p> }
                >
                    <p class="rental-note">{expiry.clone()}</p>
                </Show>
                {move || scan_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            </div>
            <Show when=is_ready>
                <div class="rental-code">
                    <span class="qr">"▦"</span>
                    <span>{code.clone()}</span>
                    <button class="scan-btn" on:click=simulate_scan>"Simulate Scan"</button>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn LockerDashboard() -> impl IntoView {
    let app = use_app();
    let ui = app.ui;
    let entries = move || app.market.with(|m| m.rentals().entries().to_vec());
    let has_entries = move || app.market.with(|m| !m.rentals().is_empty());
    let history = move || app.market.with(|m| m.rentals().history_count());

    view! {
        <Show when=move || ui.show_locker().get()>
            <div class="modal-backdrop" on:click=move |_| ui.show_locker().set(false)>
                <div class="modal locker-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <div>
                            <h2>"🔒 Locker Hub"</h2>
                            <p class="modal-subtitle">"Champerret Campus • 3rd Floor"</p>
                        </div>
                        <button class="modal-close" on:click=move |_| ui.show_locker().set(false)>"✕"</button>
                    </div>

                    <Show
                        when=has_entries
                        fallback=|| view! {
                            <div class="empty-state">
                                <h3>"No active rentals"</h3>
                                <p>"Items you rent or buy will appear here with their pickup codes."</p>
                            </div>
                        }
                    >
                        <For
                            each=entries
                            key=|entry| entry.item.id
                            children=move |entry| view! { <RentalRow entry=entry /> }
                        />
                    </Show>

                    <div class="locker-footer">
                        {move || format!("History: {} Transactions", history())}
                    </div>
                </div>
            </div>
        </Show>
    }
}
