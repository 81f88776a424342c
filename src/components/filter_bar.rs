//! Filter Bar Component
//!
//! Quick category/tag filters and the rent/buy toggle.

use leptos::prelude::*;

use closet_core::{Action, ViewMode};

use crate::context::use_app;

/// Rent / Buy toggle buttons
#[component]
fn ModeToggle() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="mode-toggle">
            {[(ViewMode::Rent, "Rent"), (ViewMode::Buy, "Buy")].into_iter().map(|(mode, label)| {
                let is_active = move || app.market.with(|m| m.mode() == mode);
                view! {
                    <button
                        class=move || if is_active() { "mode-btn active" } else { "mode-btn" }
                        on:click=move |_| app.send(Action::SetMode(mode))
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Quick filters ("all" first) plus the mode toggle
#[component]
pub fn FilterBar() -> impl IntoView {
    let app = use_app();
    let filters: Vec<String> = app.market.with_untracked(|m| {
        std::iter::once("all".to_string())
            .chain(m.config().quick_filters.iter().cloned())
            .collect()
    });

    view! {
        <div class="filter-bar">
            <div class="filter-header">
                <h2>"The Marketplace"</h2>
                <div class="quick-filters">
                    {filters.into_iter().map(|value| {
                        let target = value.clone();
                        let is_active = move || app.market.with(|m| m.filter().category.as_str() == target);
                        let on_pick = value.clone();
                        view! {
                            <button
                                class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                on:click=move |_| app.send(Action::SetFilter(on_pick.clone()))
                            >
                                {value}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
            <ModeToggle />
        </div>
    }
}
