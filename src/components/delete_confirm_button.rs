//! Delete Confirm Button
//!
//! Trash button that asks "Delete?" inline before running the action.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    /// Accessible name of the trash button, e.g. "Delete log"
    #[prop(into)]
    label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    // Clicks must not reach the row underneath (it opens the detail view)
    let arm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(true);
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(false);
        on_confirm.run(());
    };
    let disarm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(false);
    };

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button class=button_class.clone() aria-label=label.clone() on:click=arm>"🗑"</button>
            }
        >
            <span
                class="delete-confirm"
                role="group"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        armed.set(false);
                    }
                }
            >
                <span class="muted small">"Delete?"</span>
                <button class="btn ghost icon danger" aria-label="Confirm delete" on:click=confirm>"✓"</button>
                <button class="btn ghost icon" aria-label="Cancel delete" on:click=disarm>"✗"</button>
            </span>
        </Show>
    }
}
