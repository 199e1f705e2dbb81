//! Receipt Dialog Component
//!
//! Printable summary of a completed sale, rendered from the checkout
//! snapshot. Finishing clears the cart.

use leptos::prelude::*;

use crate::receipt::{render_receipt, Sale};
use crate::session::{use_session, SessionStateStoreFields};

#[component]
pub fn ReceiptDialog(sale: Sale, #[prop(into)] on_finish: Callback<()>) -> impl IntoView {
    let session = use_session();

    let text = Memo::new(move |_| {
        render_receipt(&session.state.store_profile().get(), &sale)
    });

    let print = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog receipt-dialog">
                <h2>"Struk Pembayaran"</h2>
                <pre class="receipt-text">{move || text.get()}</pre>
                <div class="dialog-actions">
                    <button class="print-btn" on:click=print>"Cetak"</button>
                    <button class="finish-btn" on:click=move |_| on_finish.run(())>"Selesai"</button>
                </div>
            </div>
        </div>
    }
}
