//! Navigation Bar
//!
//! Product name, signed-in user and the account menu.

use leptos::prelude::*;
use proglog_core::Session;

/// Logo + product name used on every screen
#[component]
pub fn BrandHeader() -> impl IntoView {
    view! {
        <header class="brand-header">
            <span class="brand-icon" aria-hidden="true">"📋"</span>
            <span class="brand-name">"Proglog"</span>
        </header>
    }
}

#[component]
pub fn Navbar(
    session: Session,
    #[prop(into)] on_sign_out: Callback<()>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let initials = session.initials();
    let email = session.email.clone();

    view! {
        <nav class="navbar" aria-label="Main navigation">
            <BrandHeader />
            <div class="navbar-user">
                <span class="navbar-email">{session.email}</span>
                <button
                    class="avatar"
                    aria-label="User menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {initials}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="dropdown-menu align-end" role="menu">
                        <div class="dropdown-label">
                            <p>"My Account"</p>
                            <p class="muted small">{email.clone()}</p>
                        </div>
                        <div class="dropdown-separator" />
                        <button class="dropdown-item" on:click=move |_| set_menu_open.set(false)>"Profile"</button>
                        <button class="dropdown-item" on:click=move |_| set_menu_open.set(false)>"Settings"</button>
                        <div class="dropdown-separator" />
                        <button
                            class="dropdown-item danger"
                            on:click=move |_| {
                                set_menu_open.set(false);
                                on_sign_out.run(());
                            }
                        >
                            "Sign Out"
                        </button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
