//! Login View Component
//!
//! Credential form delegating to the session store. The app root switches
//! to the POS screen as soon as the identity signal is populated.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify::use_notify;
use crate::session::{use_session, SessionStateStoreFields};

#[component]
pub fn LoginView() -> impl IntoView {
    let session = use_session();
    let notify = use_notify();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            notify.error("Mohon isi email dan password");
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            session.login(&email_value, &password_value).await;
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-screen">
            <form class="login-card" on:submit=on_submit>
                <h1>{move || session.state.store_profile().get().name}</h1>
                <p class="login-subtitle">"Masuk ke sistem Point of Sale"</p>

                <label class="login-field">
                    "Email"
                    <input
                        type="email"
                        placeholder="Masukkan email Anda"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>

                <label class="login-field">
                    "Password"
                    <input
                        type="password"
                        placeholder="Masukkan password Anda"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="login-submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Memproses..." } else { "Masuk" }}
                </button>

                <div class="demo-accounts">
                    <p class="demo-title">"Akun Demo:"</p>
                    <p>"Kasir: kasir@toko.com / kasir123"</p>
                    <p>"Pemilik: pemilik@toko.com / pemilik123"</p>
                </div>
            </form>
        </div>
    }
}
