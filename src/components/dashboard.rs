//! Dashboard
//!
//! Owns the entry book for the signed-in session and switches between the
//! list and the detail view of the selected entry.

use leptos::prelude::*;
use proglog_core::repository::sample_book;
use proglog_core::{EntryBook, Session};

use crate::components::{EntryDetail, LogsHistory, Navbar, TaskSection};
use crate::context::use_app_context;
use crate::store::{new_dashboard_store, store_find_entry_untracked, store_selected};

#[component]
pub fn Dashboard(
    session: Session,
    #[prop(into)] on_sign_out: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    // A fresh book per sign-in; nothing survives sign-out
    let book = if ctx.config.with_value(|c| c.seed_entries) {
        sample_book()
    } else {
        EntryBook::new()
    };
    log::info!("[APP] Dashboard opened for {} with {} entries", session.email, book.len());
    let store = new_dashboard_store(book);
    provide_context(store);

    view! {
        <div class="dashboard">
            <Navbar session=session on_sign_out=on_sign_out />
            {move || {
                let detail = store_selected(&store)
                    .and_then(|id| store_find_entry_untracked(&store, id));
                match detail {
                    Some(entry) => view! { <EntryDetail entry=entry /> }.into_any(),
                    None => view! {
                        <main class="container" aria-label="Dashboard content">
                            <section class="welcome">
                                <h1>"Welcome to Proglog"</h1>
                                <p class="muted">"Track your progress and stay on top of your goals"</p>
                            </section>
                            <TaskSection />
                            <LogsHistory />
                        </main>
                    }.into_any(),
                }
            }}
        </div>
    }
}
