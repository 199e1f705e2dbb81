//! Toast Host Component

use leptos::prelude::*;

use crate::notify::{use_notify, ToastKind};

/// Renders the current notification, if any.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_notify();

    view! {
        <div class="toast-host">
            {move || notify.toast.get().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast success",
                    ToastKind::Error => "toast error",
                };
                view! { <div class=class>{toast.message}</div> }
            })}
        </div>
    }
}
