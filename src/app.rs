//! Proglog Frontend App
//!
//! Switches between the sign-in screens and the dashboard.

use leptos::prelude::*;
use proglog_core::{DashboardConfig, Session};

use crate::components::{Dashboard, SignIn, SignUp, Toaster};
use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq)]
enum Screen {
    SignIn,
    SignUp,
    Dashboard(Session),
}

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_context(AppContext::new(config));

    let (screen, set_screen) = signal(Screen::SignIn);

    let on_sign_in = Callback::new(move |session: Session| {
        log::info!("[APP] Signed in as {}", session.email);
        set_screen.set(Screen::Dashboard(session));
    });
    let on_sign_out = Callback::new(move |_: ()| {
        log::info!("[APP] Signed out");
        set_screen.set(Screen::SignIn);
    });

    view! {
        <div class="app">
            {move || match screen.get() {
                Screen::SignIn => view! {
                    <SignIn
                        on_sign_in=on_sign_in
                        on_switch_to_sign_up=move |_| set_screen.set(Screen::SignUp)
                    />
                }.into_any(),
                Screen::SignUp => view! {
                    <SignUp
                        on_sign_up=on_sign_in
                        on_switch_to_sign_in=move |_| set_screen.set(Screen::SignIn)
                    />
                }.into_any(),
                Screen::Dashboard(session) => view! {
                    <Dashboard session=session on_sign_out=on_sign_out />
                }.into_any(),
            }}
            <Toaster />
        </div>
    }
}
