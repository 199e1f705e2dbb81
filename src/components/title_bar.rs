//! Title Bar Component
//!
//! Store name, signed-in user badge, settings and logout controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::session::{use_session, SessionStateStoreFields};

#[component]
pub fn TitleBar(#[prop(into)] on_open_settings: Callback<()>) -> impl IntoView {
    let session = use_session();

    let logout = move |_| {
        spawn_local(async move {
            session.logout().await;
        });
    };

    view! {
        <header class="title-bar">
            <span class="store-name">{move || session.state.store_profile().get().name}</span>

            <div class="title-bar-actions">
                {move || session.state.user().get().map(|user| view! {
                    <span class="user-badge">
                        {user.name.clone()}
                        <span class="user-role">{user.role.label()}</span>
                    </span>
                })}
                <button
                    class="settings-btn"
                    title="Pengaturan"
                    on:click=move |_| on_open_settings.run(())
                >
                    "⚙"
                </button>
                <button class="logout-btn" on:click=logout>"Keluar"</button>
            </div>
        </header>
    }
}
