//! Progress History
//!
//! Timeline of all entries with inline edit, quick status change, delete and
//! click-to-open.

use leptos::prelude::*;
use proglog_core::{Entry, Status};

use crate::components::{DeleteConfirmButton, StatusSelect};
use crate::context::use_app_context;
use crate::format::{format_timestamp, subtask_summary};
use crate::store::{
    store_entries, store_remove_entry, store_replace_entry, store_select, store_set_status,
    use_dashboard_store,
};

fn status_icon(status: Status) -> (&'static str, &'static str) {
    match status {
        Status::Completed => ("✔", "status-icon completed"),
        Status::InProgress => ("◔", "status-icon in-progress"),
        Status::Pending => ("○", "status-icon pending"),
    }
}

pub fn status_badge_class(status: Status) -> &'static str {
    match status {
        Status::Completed => "badge default",
        Status::InProgress => "badge secondary",
        Status::Pending => "badge outline",
    }
}

#[component]
pub fn LogsHistory() -> impl IntoView {
    let store = use_dashboard_store();

    // Only one entry is edited at a time; the form holds a full copy
    let editing = RwSignal::new(None::<Entry>);

    view! {
        <section class="logs-history" aria-labelledby="logs-heading">
            <div class="card">
                <div class="card-header">
                    <h2 id="logs-heading" class="card-title">"Progress History"</h2>
                    <p class="card-description">"A timeline of all your logged progress and activities"</p>
                </div>
                <div class="card-content scroll-area">
                    {move || {
                        let entries = store_entries(&store);
                        if entries.is_empty() {
                            view! {
                                <div class="empty-state" role="status" aria-live="polite">
                                    <span class="empty-icon" aria-hidden="true">"📅"</span>
                                    <p class="muted">"No progress logs yet. Start tracking your journey!"</p>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <ul class="log-list" aria-label="Progress logs">
                                    {entries.into_iter().map(|entry| view! {
                                        <li><LogRow entry=entry editing=editing /></li>
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn LogRow(entry: Entry, editing: RwSignal<Option<Entry>>) -> impl IntoView {
    let id = entry.id;
    let is_editing = move || editing.with(|e| e.as_ref().map(|e| e.id) == Some(id));
    let display = entry.clone();

    view! {
        <div class="card log-card">
            <Show
                when=is_editing
                fallback=move || view! { <LogSummary entry=display.clone() editing=editing /> }
            >
                <LogEditForm editing=editing />
            </Show>
        </div>
    }
}

#[component]
fn LogSummary(entry: Entry, editing: RwSignal<Option<Entry>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let id = entry.id;
    let (icon, icon_class) = status_icon(entry.status);
    let summary = (!entry.subtasks.is_empty())
        .then(|| subtask_summary(entry.completed_subtasks(), entry.subtasks.len()));
    let timestamp = format_timestamp(&entry.created_at);
    let datetime = entry.created_at.to_rfc3339();
    let for_edit = entry.clone();

    let open = move || store_select(&store, Some(id));

    view! {
        <div
            class="log-summary"
            role="button"
            tabindex="0"
            aria-label=format!("Open details for {}", entry.name)
            on:click=move |_| open()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                // Keys pressed on the row's own buttons are theirs
                if ev.target() != ev.current_target() {
                    return;
                }
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    open();
                }
            }
        >
            <div class=icon_class aria-hidden="true">{icon}</div>
            <div class="log-body">
                <div class="log-top">
                    <div class="log-text">
                        <h3>{entry.name.clone()}</h3>
                        <p class="muted small">{entry.description.clone()}</p>
                        {summary.map(|text| view! {
                            <div class="subtask-summary">
                                <span aria-hidden="true">"☑"</span>
                                <span class="muted small">{text}</span>
                            </div>
                        })}
                    </div>
                    <StatusMenu entry_id=id status=entry.status />
                </div>
                <div class="log-bottom">
                    <div class="muted small">
                        <span aria-hidden="true">"📅 "</span>
                        <time datetime=datetime>{timestamp}</time>
                    </div>
                    <div class="log-actions">
                        <button
                            class="btn ghost icon"
                            aria-label="Edit log"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                editing.set(Some(for_edit.clone()));
                            }
                        >
                            "✎"
                        </button>
                        <DeleteConfirmButton
                            button_class="btn ghost icon danger"
                            label="Delete log"
                            on_confirm=move |_| {
                                store_remove_entry(&store, id);
                                ctx.notify("Log deleted successfully");
                            }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Badge that opens a menu of status shortcuts
#[component]
fn StatusMenu(entry_id: u32, status: Status) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let (open, set_open) = signal(false);

    view! {
        <div class="status-menu">
            <button
                class="badge-btn"
                aria-label="Change status"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_open.update(|v| *v = !*v);
                }
            >
                <span class=status_badge_class(status)>{status.label()}</span>
            </button>
            <Show when=move || open.get()>
                <div class="dropdown-menu align-end" role="menu">
                    {Status::ALL.into_iter().map(|choice| view! {
                        <button
                            class="dropdown-item"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_open.set(false);
                                store_set_status(&store, entry_id, choice);
                                ctx.notify(format!("Status changed to {}", choice.label()));
                            }
                        >
                            <span class=status_icon(choice).1>{status_icon(choice).0}</span>
                            " "
                            {choice.label()}
                        </button>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Inline editor for name, description and status. Save replaces the whole entry.
#[component]
fn LogEditForm(editing: RwSignal<Option<Entry>>) -> impl IntoView {
    let store = use_dashboard_store();
    let field_id = move |prefix: &str| {
        let id = editing.with_untracked(|e| e.as_ref().map(|e| e.id).unwrap_or_default());
        format!("{}-{}", prefix, id)
    };

    let name = move || editing.with(|e| e.as_ref().map(|e| e.name.clone()).unwrap_or_default());
    let description = move || editing.with(|e| e.as_ref().map(|e| e.description.clone()).unwrap_or_default());
    let status = Signal::derive(move || editing.with(|e| e.as_ref().map(|e| e.status).unwrap_or_default()));

    let save = move |_| {
        if let Some(entry) = editing.get_untracked() {
            store_replace_entry(&store, entry);
        }
        editing.set(None);
    };

    view! {
        <div class="edit-form">
            <div class="field">
                <label for=field_id("edit-task")>"Task Name"</label>
                <input
                    id=field_id("edit-task")
                    prop:value=name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editing.update(|e| if let Some(e) = e { e.name = value });
                    }
                />
            </div>
            <div class="field">
                <label for=field_id("edit-desc")>"Description"</label>
                <textarea
                    id=field_id("edit-desc")
                    rows="3"
                    prop:value=description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editing.update(|e| if let Some(e) = e { e.description = value });
                    }
                ></textarea>
            </div>
            <div class="field">
                <label for=field_id("edit-status")>"Status"</label>
                <StatusSelect
                    id=field_id("edit-status")
                    value=status
                    on_change=move |s: Status| editing.update(|e| if let Some(e) = e { e.status = s })
                />
            </div>
            <div class="form-actions">
                <button class="btn primary small" on:click=save>"Save"</button>
                <button class="btn outline small" on:click=move |_| editing.set(None)>"Cancel"</button>
            </div>
        </div>
    }
}
