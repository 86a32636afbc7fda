//! Task Section
//!
//! "New progress log" form and the per-status counters.

use chrono::Utc;
use leptos::prelude::*;
use proglog_core::{NewEntry, Status};

use crate::context::use_app_context;
use crate::store::{store_add_entry, store_status_counts, use_dashboard_store};

#[component]
pub fn TaskSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let (is_adding, set_is_adding) = signal(false);
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(Status::InProgress);

    let reset_form = move || {
        set_name.set(String::new());
        set_description.set(String::new());
        set_status.set(Status::InProgress);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = NewEntry {
            name: name.get_untracked(),
            description: description.get_untracked(),
            status: status.get_untracked(),
            created_at: Utc::now(),
        };
        // Empty name or description: the book rejects it and nothing happens
        if store_add_entry(&store, draft).is_some() {
            set_is_adding.set(false);
            reset_form();
            ctx.notify("Progress log added successfully!");
        }
    };

    let counts = move || store_status_counts(&store);

    view! {
        <section class="task-section" aria-labelledby="tasks-heading">
            <div class="section-header">
                <h2 id="tasks-heading">"Your Tasks"</h2>
                <button
                    class="btn primary"
                    aria-expanded=move || is_adding.get().to_string()
                    aria-controls="add-task-form"
                    on:click=move |_| set_is_adding.update(|v| *v = !*v)
                >
                    "+ Add Task"
                </button>
            </div>

            <Show when=move || is_adding.get()>
                <div class="card" id="add-task-form">
                    <div class="card-header">
                        <h3 class="card-title">"New Progress Log"</h3>
                        <p class="card-description">"Record your progress on any task or mission"</p>
                    </div>
                    <form on:submit=submit>
                        <div class="card-content">
                            <div class="field">
                                <label for="task-name">"Task Name"</label>
                                <input
                                    id="task-name"
                                    placeholder="e.g., Complete landing page design"
                                    required
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="field">
                                <label for="description">"Description"</label>
                                <textarea
                                    id="description"
                                    rows="4"
                                    placeholder="Describe what you've accomplished or what you're working on..."
                                    required
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <div class="field">
                                <label for="status">"Status"</label>
                                <StatusSelect id="status" value=status on_change=move |s: Status| set_status.set(s) />
                            </div>
                            <div class="form-actions">
                                <button type="submit" class="btn primary">"Save Log"</button>
                                <button type="button" class="btn outline" on:click=move |_| set_is_adding.set(false)>
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    </form>
                </div>
            </Show>

            <div class="stat-grid">
                <StatCard title="Active Tasks" icon="🎯" caption="Tasks in progress" value=Signal::derive(move || counts().in_progress) />
                <StatCard title="Completed" icon="📈" caption="Total completed" value=Signal::derive(move || counts().completed) />
                <StatCard title="Pending" icon="🕒" caption="Awaiting start" value=Signal::derive(move || counts().pending) />
            </div>
        </section>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    icon: &'static str,
    caption: &'static str,
    value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-header">
                <span class="stat-title">{title}</span>
                <span class="stat-icon" aria-hidden="true">{icon}</span>
            </div>
            <div aria-live="polite" aria-atomic="true">
                <div class="stat-value">{move || value.get()}</div>
                <p class="muted small">{caption}</p>
            </div>
        </div>
    }
}

/// `<select>` over the three statuses
#[component]
pub fn StatusSelect(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<Status>,
    #[prop(into)] on_change: Callback<Status>,
) -> impl IntoView {
    view! {
        <select
            id=id
            prop:value=move || value.get().as_str()
            on:change=move |ev| on_change.run(Status::from_str(&event_target_value(&ev)))
        >
            {Status::ALL.into_iter().map(|s| view! {
                <option value=s.as_str() selected=move || value.get() == s>{s.label()}</option>
            }).collect_view()}
        </select>
    }
}
