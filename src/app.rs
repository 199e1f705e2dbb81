//! Kasir POS Frontend App
//!
//! Root component: owns the ambient contexts, resumes the persisted session
//! on startup, and switches between the loading screen, login view, and POS
//! screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::cart::{cart_clear, use_cart, CartState, CartStore};
use crate::catalog::CatalogContext;
use crate::components::{
    CartPanel, CheckoutDialog, LoginView, ProductGrid, ReceiptDialog, SettingsDialog, TitleBar,
    ToastHost,
};
use crate::notify::NotifyContext;
use crate::receipt::Sale;
use crate::session::{SessionContext, SessionStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let notify = NotifyContext::new();
    let session = SessionContext::new(notify);
    let catalog = CatalogContext::new(notify);
    let cart: CartStore = Store::new(CartState::default());

    // Provide context to all children
    provide_context(notify);
    provide_context(session);
    provide_context(catalog);
    provide_context(cart);

    // Resume any persisted session on mount; loading stays true until this
    // resolves either way.
    Effect::new(move |_| {
        spawn_local(async move {
            session.resume().await;
        });
    });

    // Load catalog data once signed in, and again whenever the reload
    // trigger bumps (stock writes invalidate the product cache).
    Effect::new(move |_| {
        let _ = catalog.reload_trigger.get();
        if session.state.user().get().is_none() {
            return;
        }
        let token = session.state.session().get_untracked().map(|s| s.access_token);
        spawn_local(async move {
            catalog.load(token).await;
        });
    });

    view! {
        <ToastHost />
        {move || {
            if session.state.loading().get() {
                view! {
                    <div class="loading-screen">
                        <div class="spinner"></div>
                        <p>"Memuat..."</p>
                    </div>
                }.into_any()
            } else if session.state.user().get().is_some() {
                view! { <PosView /> }.into_any()
            } else {
                view! { <LoginView /> }.into_any()
            }
        }}
    }
}

/// Main POS screen: catalog on the left, cart on the right, dialogs on top.
#[component]
fn PosView() -> impl IntoView {
    let cart = use_cart();

    let (checkout_open, set_checkout_open) = signal(false);
    let (receipt, set_receipt) = signal::<Option<Sale>>(None);
    let (settings_open, set_settings_open) = signal(false);

    view! {
        <div class="pos-app">
            <TitleBar on_open_settings=move |_: ()| set_settings_open.set(true) />

            <main class="pos-layout">
                <ProductGrid />
                <CartPanel on_checkout=move |_: ()| set_checkout_open.set(true) />
            </main>

            <Show when=move || checkout_open.get()>
                <CheckoutDialog
                    on_confirm=move |sale: Sale| {
                        set_checkout_open.set(false);
                        set_receipt.set(Some(sale));
                    }
                    on_close=move |_: ()| set_checkout_open.set(false)
                />
            </Show>

            {move || receipt.get().map(|sale| view! {
                <ReceiptDialog
                    sale=sale
                    on_finish=move |_: ()| {
                        cart_clear(&cart);
                        set_receipt.set(None);
                    }
                />
            })}

            <Show when=move || settings_open.get()>
                <SettingsDialog on_close=move |_: ()| set_settings_open.set(false) />
            </Show>
        </div>
    }
}
