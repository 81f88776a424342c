//! Listing Modal Component
//!
//! "List an Item" form. Edits a local draft; submitting hands it to the
//! marketplace, which validates, prices the deposit and prepends the item.

use leptos::prelude::*;

use closet_core::{Action, Category, Condition, ListingDraft, Outcome};

use crate::context::use_app;
use crate::format::euro;
use crate::services::RandomStockUploader;
use crate::store::UiStateStoreFields;

#[component]
pub fn ListingModal() -> impl IntoView {
    let app = use_app();
    let ui = app.ui;

    let draft = RwSignal::new(ListingDraft::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let close = move || {
        set_error.set(None);
        ui.show_listing().set(false);
    };

    let simulate_upload = move |_: web_sys::MouseEvent| {
        let images = app.market.with_untracked(|m| m.config().stock_images.clone());
        let mut uploader = RandomStockUploader::new(images);
        let result = draft.try_update(|d| d.attach_upload(&mut uploader));
        if let Some(Err(e)) = result {
            log::warn!("[LISTING] Upload failed: {}", e);
            set_error.set(Some(e.to_string()));
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match app.dispatch(Action::SubmitListing(draft.get())) {
            Ok(Outcome::Listed { .. }) => {
                draft.set(ListingDraft::default());
                set_error.set(None);
            }
            Ok(_) => {}
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    view! {
        <Show when=move || ui.show_listing().get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal listing-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <div>
                            <h2>"List an Item"</h2>
                            <p class="modal-subtitle">"Earn money from your unused wardrobe"</p>
                        </div>
                        <button class="modal-close" on:click=move |_| close()>"✕"</button>
                    </div>

                    <form on:submit=on_submit>
                        <label>"Item Title"</label>
                        <input
                            required
                            class="input"
                            placeholder="e.g. Navy Blue Blazer"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />

                        <label>"Item Photo"</label>
                        <div class="photo-row">
                            <input
                                class="input"
                                placeholder="Paste Image URL..."
                                prop:value=move || draft.with(|d| d.image.clone())
                                on:input=move |ev| draft.update(|d| d.image = event_target_value(&ev))
                            />
                            <button type="button" on:click=simulate_upload>"Upload"</button>
                        </div>
                        {move || {
                            let image = draft.with(|d| d.image.clone());
                            (!image.is_empty()).then(|| view! { <img class="photo-preview" src=image alt="Preview" /> })
                        }}

                        <div class="form-row">
                            <div>
                                <label>"Category"</label>
                                <select
                                    class="input"
                                    prop:value=move || draft.with(|d| d.category.as_str())
                                    on:change=move |ev| {
                                        if let Some(category) = Category::from_label(&event_target_value(&ev)) {
                                            draft.update(|d| d.category = category);
                                        }
                                    }
                                >
                                    {Category::ALL.iter().map(|c| view! {
                                        <option value=c.as_str()>{c.display_label()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div>
                                <label>"Condition"</label>
                                <select
                                    class="input"
                                    prop:value=move || draft.with(|d| d.condition.as_str())
                                    on:change=move |ev| {
                                        if let Some(condition) = Condition::from_label(&event_target_value(&ev)) {
                                            draft.update(|d| d.condition = condition);
                                        }
                                    }
                                >
                                    {Condition::ALL.iter().map(|c| view! {
                                        <option value=c.as_str()>{c.display_label()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div>
                                <label>"Size"</label>
                                <input
                                    class="input"
                                    prop:value=move || draft.with(|d| d.size.clone())
                                    on:input=move |ev| draft.update(|d| d.size = event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div class="deposit-notice">
                            <span class="deposit-notice-title">"Smart Deposit: "</span>
                            "Based on the " <strong>{move || draft.with(|d| d.category.as_str())}</strong>
                            " category, we will automatically set the borrower deposit to "
                            <strong>{move || euro(draft.with(|d| d.suggested_deposit()))}</strong> "."
                        </div>

                        <div class="form-row">
                            <div>
                                <label>"Rent Price / Day"</label>
                                <input
                                    type="number"
                                    required
                                    min="1"
                                    class="input"
                                    placeholder="5"
                                    prop:value=move || draft.with(|d| d.price_rent.clone())
                                    on:input=move |ev| draft.update(|d| d.price_rent = event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label>"Buy Price"</label>
                                <input
                                    type="number"
                                    required
                                    min="1"
                                    class="input"
                                    placeholder="25"
                                    prop:value=move || draft.with(|d| d.price_buy.clone())
                                    on:input=move |ev| draft.update(|d| d.price_buy = event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <label>"Description"</label>
                        <textarea
                            class="input"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>

                        {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                        <button type="submit" class="primary-btn">"Publish to Market"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
