//! Stock Editor Component
//!
//! Inline owner-only stock overwrite. Expands to a small form, writes
//! through the catalog accessor, and collapses on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::use_catalog;
use crate::models::Product;
use crate::notify::use_notify;
use crate::session::{use_session, SessionStateStoreFields};

#[component]
pub fn StockEditor(product: Product) -> impl IntoView {
    let catalog = use_catalog();
    let session = use_session();
    let notify = use_notify();

    let (editing, set_editing) = signal(false);
    let (value, set_value) = signal(product.stock.to_string());
    let (saving, set_saving) = signal(false);
    let product_id = product.id.clone();

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let Ok(new_stock) = value.get().trim().parse::<i64>() else {
            notify.error("Stok tidak valid");
            return;
        };
        if new_stock < 0 {
            notify.error("Stok tidak valid");
            return;
        }
        let id = product_id.clone();
        set_saving.set(true);
        spawn_local(async move {
            let token = session.state.session().get_untracked().map(|s| s.access_token);
            if catalog.set_product_stock(&id, new_stock, token.as_deref()).await {
                set_editing.set(false);
            }
            set_saving.set(false);
        });
    };

    view! {
        {move || if editing.get() {
            let save = save.clone();
            view! {
                <form class="stock-edit-form" on:submit=save>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || value.get()
                        on:input=move |ev| set_value.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || saving.get()>"✓"</button>
                    <button type="button" on:click=move |_| set_editing.set(false)>"✗"</button>
                </form>
            }.into_any()
        } else {
            view! {
                <button
                    class="stock-edit-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_editing.set(true);
                    }
                >
                    "Ubah Stok"
                </button>
            }.into_any()
        }}
    }
}
