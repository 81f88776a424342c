//! Auth Modal Component
//!
//! Student email gate. The password field is captured for the form's sake
//! and never checked.

use leptos::prelude::*;

use closet_core::Action;

use crate::context::use_app;
use crate::store::UiStateStoreFields;

#[component]
pub fn AuthModal() -> impl IntoView {
    let app = use_app();
    let ui = app.ui;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let error = move || app.market.with(|m| m.gate().error().map(str::to_string));

    let close = move || {
        app.send(Action::EmailEdited);
        ui.show_auth().set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if app.dispatch(Action::Authenticate { email: email.get() }).is_ok() {
            set_email.set(String::new());
            set_password.set(String::new());
            ui.show_auth().set(false);
        }
    };

    view! {
        <Show when=move || ui.show_auth().get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal auth-modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Student Access"</h2>
                    <p class="modal-subtitle">"Closed-Loop Verification"</p>
                    <p class="auth-notice">
                        <strong>"CampusCloset is exclusive to ESCP."</strong>
                        " Please authenticate with your student credentials to access the marketplace and locker codes."
                    </p>

                    <form on:submit=on_submit>
                        <label>"ESCP Email"</label>
                        <input
                            type="email"
                            required
                            placeholder="student@edu.escp.eu"
                            class=move || if error().is_some() { "input invalid" } else { "input" }
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                app.send(Action::EmailEdited);
                            }
                        />

                        <label>"Password"</label>
                        <input
                            type="password"
                            required
                            placeholder="••••••••"
                            class="input"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />

                        {move || error().map(|msg| view! { <div class="form-error">"⚠ " {msg}</div> })}

                        <button type="submit" class="primary-btn">"Secure Login"</button>
                    </form>

                    <button class="link-btn" on:click=move |_| close()>"Return to Browse"</button>
                </div>
            </div>
        </Show>
    }
}
