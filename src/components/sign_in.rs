//! Sign In Component
//!
//! Mocked sign-in form: any non-empty email/password pair is accepted.

use leptos::prelude::*;
use proglog_core::{Session, SignInForm};

use crate::components::BrandHeader;

#[component]
pub fn SignIn(
    #[prop(into)] on_sign_in: Callback<Session>,
    #[prop(into)] on_switch_to_sign_up: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = SignInForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        // Missing fields: silently ignored
        if let Ok(session) = form.submit() {
            on_sign_in.run(session);
        }
    };

    view! {
        <div class="auth-page">
            <BrandHeader />
            <div class="auth-center">
                <div class="card auth-card">
                    <div class="card-header">
                        <h2 class="card-title">"🔑 Welcome to Proglog"</h2>
                        <p class="card-description">"Sign in to track your progress and achieve your goals"</p>
                    </div>
                    <form on:submit=submit>
                        <div class="card-content">
                            <div class="field">
                                <label for="email">"Email"</label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="you@example.com"
                                    required
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="field">
                                <label for="password">"Password"</label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="Enter your password"
                                    required
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="card-footer">
                            <button type="submit" class="btn primary wide">"Sign In"</button>
                            <p class="muted center">
                                "Don't have an account? "
                                <button
                                    type="button"
                                    class="link-btn"
                                    aria-label="Switch to sign up page"
                                    on:click=move |_| on_switch_to_sign_up.run(())
                                >
                                    "Sign Up"
                                </button>
                            </p>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
