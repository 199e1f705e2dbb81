//! Cart Panel Component
//!
//! Staged lines with quantity steppers, the running total, and the
//! checkout button.

use leptos::prelude::*;

use crate::cart::{
    cart_remove_line, cart_set_quantity, cart_total, line_total, use_cart, CartStateStoreFields,
};
use crate::money::format_rupiah;

#[component]
pub fn CartPanel(#[prop(into)] on_checkout: Callback<()>) -> impl IntoView {
    let cart = use_cart();

    let total = Memo::new(move |_| cart_total(&cart.lines().get()));
    let is_empty = Memo::new(move |_| cart.lines().get().is_empty());

    view! {
        <aside class="cart-panel">
            <h2>"Keranjang"</h2>

            <div class="cart-lines">
                <For
                    each=move || cart.lines().get()
                    key=|line| line.product_id.clone()
                    children=move |line| {
                        let id = line.product_id;
                        let name = line.name;
                        // Rows are keyed by product id, so quantity and
                        // subtotal must be re-read from the store.
                        let qty = {
                            let id = id.clone();
                            Memo::new(move |_| {
                                cart.lines().get().iter()
                                    .find(|l| l.product_id == id)
                                    .map(|l| l.quantity)
                                    .unwrap_or(0)
                            })
                        };
                        let subtotal = {
                            let id = id.clone();
                            Memo::new(move |_| {
                                cart.lines().get().iter()
                                    .find(|l| l.product_id == id)
                                    .map(line_total)
                                    .unwrap_or(0)
                            })
                        };
                        let decrement = {
                            let id = id.clone();
                            move |_| cart_set_quantity(&cart, &id, qty.get().saturating_sub(1))
                        };
                        let increment = {
                            let id = id.clone();
                            move |_| cart_set_quantity(&cart, &id, qty.get() + 1)
                        };
                        let remove = move |_| cart_remove_line(&cart, &id);

                        view! {
                            <div class="cart-line">
                                <span class="cart-line-name">{name}</span>
                                <div class="cart-line-qty">
                                    <button class="qty-btn" on:click=decrement>"−"</button>
                                    <span class="qty-value">{move || qty.get()}</span>
                                    <button class="qty-btn" on:click=increment>"+"</button>
                                </div>
                                <span class="cart-line-subtotal">
                                    {move || format_rupiah(subtotal.get())}
                                </span>
                                <button class="cart-line-remove" on:click=remove>"×"</button>
                            </div>
                        }
                    }
                />
            </div>

            <div class="cart-total-row">
                <span>"Total"</span>
                <span class="cart-total">{move || format_rupiah(total.get())}</span>
            </div>

            <button
                class="checkout-btn"
                disabled=move || is_empty.get()
                on:click=move |_| on_checkout.run(())
            >
                "Bayar"
            </button>
        </aside>
    }
}
