//! Checkout Dialog Component
//!
//! Payment method selection and, for cash, amount paid with live change.
//! Confirming snapshots the cart into a `Sale` for the receipt. Change is a
//! display figure only; an underpaid cash sale is not rejected.

use leptos::prelude::*;

use crate::cart::{cart_total, change_due, use_cart, CartStateStoreFields};
use crate::models::PaymentMethod;
use crate::money::{format_rupiah, parse_amount};
use crate::receipt::Sale;

#[component]
pub fn CheckoutDialog(
    #[prop(into)] on_confirm: Callback<Sale>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let cart = use_cart();

    let (method, set_method) = signal(PaymentMethod::Cash);
    let (paid_input, set_paid_input) = signal(String::new());

    let total = Memo::new(move |_| cart_total(&cart.lines().get()));
    let amount_paid = Memo::new(move |_| parse_amount(&paid_input.get()).unwrap_or(0));

    let confirm = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let chosen = method.get();
        let paid = match chosen {
            PaymentMethod::Cash => amount_paid.get(),
            // Non-cash methods settle exactly.
            PaymentMethod::Qris | PaymentMethod::Debit => total.get(),
        };
        on_confirm.run(Sale {
            lines: cart.lines().get_untracked(),
            method: chosen,
            amount_paid: paid,
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog checkout-dialog" on:click=|ev| ev.stop_propagation()>
                <h2>"Pembayaran"</h2>
                <form on:submit=confirm>
                    <div class="payment-methods">
                        {PaymentMethod::ALL.iter().map(|m| {
                            let m = *m;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if method.get() == m { "method-btn active" } else { "method-btn" }
                                    }
                                    on:click=move |_| set_method.set(m)
                                >
                                    {m.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <div class="checkout-total">
                        <span>"Total"</span>
                        <span>{move || format_rupiah(total.get())}</span>
                    </div>

                    <Show when=move || method.get() == PaymentMethod::Cash>
                        <label class="amount-paid">
                            "Dibayar"
                            <input
                                type="text"
                                inputmode="numeric"
                                placeholder="0"
                                prop:value=move || paid_input.get()
                                on:input=move |ev| set_paid_input.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="checkout-change">
                            <span>"Kembalian"</span>
                            <span>{move || format_rupiah(change_due(amount_paid.get(), total.get()))}</span>
                        </div>
                    </Show>

                    <div class="dialog-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Batal"
                        </button>
                        <button type="submit" class="confirm-btn">"Selesaikan Pembayaran"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
