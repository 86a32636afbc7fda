//! Sign Up Component
//!
//! Mocked account creation. The password confirmation mismatch is the only
//! validation message shown to the user.

use leptos::prelude::*;
use proglog_core::{Session, SignUpForm};

use crate::components::BrandHeader;

#[component]
pub fn SignUp(
    #[prop(into)] on_sign_up: Callback<Session>,
    #[prop(into)] on_switch_to_sign_in: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let form = SignUpForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        match form.submit() {
            Ok(session) => on_sign_up.run(session),
            Err(e) => set_error.set(e.user_message()),
        }
    };

    let has_error = move || error.get().is_some();

    view! {
        <div class="auth-page">
            <BrandHeader />
            <div class="auth-center">
                <div class="card auth-card">
                    <div class="card-header">
                        <h2 class="card-title">"👤 Create an Account"</h2>
                        <p class="card-description">"Start tracking your progress today"</p>
                    </div>
                    <form on:submit=submit>
                        <div class="card-content">
                            <div class="field">
                                <label for="name">"Name"</label>
                                <input
                                    id="name"
                                    type="text"
                                    placeholder="Your name"
                                    required
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="field">
                                <label for="signup-email">"Email"</label>
                                <input
                                    id="signup-email"
                                    type="email"
                                    placeholder="you@example.com"
                                    required
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="field">
                                <label for="signup-password">"Password"</label>
                                <input
                                    id="signup-password"
                                    type="password"
                                    placeholder="Create a password"
                                    required
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="field">
                                <label for="confirm-password">"Confirm Password"</label>
                                <input
                                    id="confirm-password"
                                    type="password"
                                    placeholder="Confirm your password"
                                    required
                                    aria-invalid=move || if has_error() { "true" } else { "false" }
                                    prop:value=move || confirm_password.get()
                                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                />
                            </div>
                            {move || error.get().map(|msg| view! {
                                <p id="password-error" class="error-text" role="alert">{msg}</p>
                            })}
                        </div>
                        <div class="card-footer">
                            <button type="submit" class="btn primary wide">"Create Account"</button>
                            <p class="muted center">
                                "Already have an account? "
                                <button
                                    type="button"
                                    class="link-btn"
                                    aria-label="Switch to sign in page"
                                    on:click=move |_| on_switch_to_sign_in.run(())
                                >
                                    "Sign In"
                                </button>
                            </p>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
