//! Toast outlet.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.toast.get().map(|toast| view! {
            <div class="toast" role="status" aria-live="polite" on:click=move |_| ctx.dismiss_toast()>
                <span class="toast-icon">"✓"</span>
                <span>{toast.message}</span>
            </div>
        })}
    }
}
