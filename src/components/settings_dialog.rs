//! Settings Dialog Component
//!
//! Edits the signed-in profile and (for owners) the store profile. Both are
//! shallow merges into local state only and are lost on reload.

use leptos::prelude::*;

use crate::models::{StorePatch, UserPatch};
use crate::session::{use_session, SessionStateStoreFields};

#[component]
pub fn SettingsDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let session = use_session();
    let user = session.state.user().get_untracked();
    let profile = session.state.store_profile().get_untracked();
    let is_owner = user.as_ref().is_some_and(|u| u.role.is_owner());

    let (name, set_name) = signal(user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let (phone, set_phone) = signal(user.as_ref().map(|u| u.phone.clone()).unwrap_or_default());
    let (address, set_address) =
        signal(user.as_ref().map(|u| u.address.clone()).unwrap_or_default());

    let (store_name, set_store_name) = signal(profile.name);
    let (store_address, set_store_address) = signal(profile.address);
    let (store_phone, set_store_phone) = signal(profile.phone);
    let (store_email, set_store_email) = signal(profile.email);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        session.update_user(UserPatch {
            name: Some(name.get()),
            phone: Some(phone.get()),
            address: Some(address.get()),
            ..Default::default()
        });
        if is_owner {
            session.update_store(StorePatch {
                name: Some(store_name.get()),
                address: Some(store_address.get()),
                phone: Some(store_phone.get()),
                email: Some(store_email.get()),
            });
        }
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog settings-dialog" on:click=|ev| ev.stop_propagation()>
                <h2>"Pengaturan"</h2>
                <form on:submit=save>
                    <fieldset class="settings-section">
                        <legend>"Profil Saya"</legend>
                        <label>
                            "Nama"
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Telepon"
                            <input
                                type="text"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Alamat"
                            <input
                                type="text"
                                prop:value=move || address.get()
                                on:input=move |ev| set_address.set(event_target_value(&ev))
                            />
                        </label>
                    </fieldset>

                    <Show when=move || is_owner>
                        <fieldset class="settings-section">
                            <legend>"Profil Toko"</legend>
                            <label>
                                "Nama Toko"
                                <input
                                    type="text"
                                    prop:value=move || store_name.get()
                                    on:input=move |ev| set_store_name.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Alamat"
                                <input
                                    type="text"
                                    prop:value=move || store_address.get()
                                    on:input=move |ev| set_store_address.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Telepon"
                                <input
                                    type="text"
                                    prop:value=move || store_phone.get()
                                    on:input=move |ev| set_store_phone.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "Email"
                                <input
                                    type="email"
                                    prop:value=move || store_email.get()
                                    on:input=move |ev| set_store_email.set(event_target_value(&ev))
                                />
                            </label>
                        </fieldset>
                    </Show>

                    <p class="settings-note">"Perubahan hanya tersimpan di perangkat ini."</p>

                    <div class="dialog-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Batal"
                        </button>
                        <button type="submit" class="confirm-btn">"Simpan"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
