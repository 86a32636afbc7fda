//! Entry Detail
//!
//! Full-page view of one entry: header, progress tracker and the
//! Whiteboard / Brainstorm / Logic Map tabs. All panels edit a local copy of
//! the entry and push the whole entry back to the store.

use chrono::Utc;
use leptos::prelude::*;
use proglog_core::Entry;

use crate::components::logs_history::status_badge_class;
use crate::components::{Brainstorm, LogicMapPanel, Whiteboard};
use crate::context::use_app_context;
use crate::format::subtask_summary;
use crate::store::{store_replace_entry, store_select, use_dashboard_store};

/// Local copy of the open entry plus the callback that commits it
#[derive(Clone, Copy)]
pub struct EntryDraft {
    pub entry: RwSignal<Entry>,
    on_update: Callback<Entry>,
}

impl EntryDraft {
    pub fn new(entry: Entry, on_update: Callback<Entry>) -> Self {
        Self {
            entry: RwSignal::new(entry),
            on_update,
        }
    }

    /// Mutate the copy and commit it
    pub fn edit<R>(&self, f: impl FnOnce(&mut Entry) -> R) -> Option<R> {
        let out = self.entry.try_update(f);
        if out.is_some() {
            self.push();
        }
        out
    }

    /// Mutate the copy without committing (drag, slider scrubbing)
    pub fn edit_local<R>(&self, f: impl FnOnce(&mut Entry) -> R) -> Option<R> {
        self.entry.try_update(f)
    }

    pub fn push(&self) {
        if let Some(entry) = self.entry.try_get_untracked() {
            self.on_update.run(entry);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailTab {
    Whiteboard,
    Brainstorm,
    LogicMap,
}

impl DetailTab {
    const ALL: [DetailTab; 3] = [DetailTab::Whiteboard, DetailTab::Brainstorm, DetailTab::LogicMap];

    fn label(&self) -> &'static str {
        match self {
            DetailTab::Whiteboard => "Whiteboard",
            DetailTab::Brainstorm => "Brainstorm",
            DetailTab::LogicMap => "Logic Map",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            DetailTab::Whiteboard => "✏",
            DetailTab::Brainstorm => "💡",
            DetailTab::LogicMap => "🔗",
        }
    }
}

#[component]
pub fn EntryDetail(entry: Entry) -> impl IntoView {
    let store = use_dashboard_store();
    log::debug!("[DETAIL] open entry {}", entry.id);

    let draft = EntryDraft::new(entry, Callback::new(move |e: Entry| store_replace_entry(&store, e)));
    let (tab, set_tab) = signal(DetailTab::Whiteboard);

    let name = move || draft.entry.with(|e| e.name.clone());
    let description = move || draft.entry.with(|e| e.description.clone());
    let status = move || draft.entry.with(|e| e.status);

    view! {
        <main class="container detail" aria-label="Entry details">
            <div class="detail-header">
                <button class="btn ghost icon" aria-label="Back to list" on:click=move |_| store_select(&store, None)>
                    "←"
                </button>
                <div class="detail-title">
                    <h1>{name}</h1>
                    <p class="muted">{description}</p>
                </div>
                <span class=move || status_badge_class(status())>{move || status().label()}</span>
            </div>

            <ProgressTracker draft=draft />

            <div class="tabs">
                <div class="tab-list" role="tablist">
                    {DetailTab::ALL.into_iter().map(|t| view! {
                        <button
                            role="tab"
                            class="tab-trigger"
                            class:active=move || tab.get() == t
                            aria-selected=move || (tab.get() == t).to_string()
                            on:click=move |_| set_tab.set(t)
                        >
                            <span aria-hidden="true">{t.icon()}</span>
                            " "
                            {t.label()}
                        </button>
                    }).collect_view()}
                </div>
                // Panels stay mounted so the canvas and the stopwatch survive tab switches
                <div class="tab-panel" role="tabpanel" class:hidden=move || tab.get() != DetailTab::Whiteboard>
                    <Whiteboard draft=draft />
                </div>
                <div class="tab-panel" role="tabpanel" class:hidden=move || tab.get() != DetailTab::Brainstorm>
                    <Brainstorm draft=draft />
                </div>
                <div class="tab-panel" role="tabpanel" class:hidden=move || tab.get() != DetailTab::LogicMap>
                    <LogicMapPanel draft=draft />
                </div>
            </div>
        </main>
    }
}

/// Progress bar, manual slider and the mini-task checklist
#[component]
fn ProgressTracker(draft: EntryDraft) -> impl IntoView {
    let ctx = use_app_context();
    let (new_title, set_new_title) = signal(String::new());

    let percentage = move || draft.entry.with(|e| e.percentage);
    let has_subtasks = move || draft.entry.with(|e| !e.subtasks.is_empty());
    let counts = move || draft.entry.with(|e| (e.completed_subtasks(), e.subtasks.len()));

    let add_subtask = move || {
        let title = new_title.get_untracked();
        if let Some(Some(_)) = draft.edit(|e| e.add_subtask(&title, Utc::now())) {
            set_new_title.set(String::new());
            ctx.notify("Subtask added");
        }
    };

    view! {
        <div class="card progress-card">
            <div class="card-header">
                <h2 class="card-title">"📈 Progress Tracker"</h2>
                <p class="card-description">
                    {move || if has_subtasks() {
                        "Calculated from completed mini tasks"
                    } else {
                        "Set progress manually or add mini tasks"
                    }}
                </p>
            </div>
            <div class="card-content">
                <div class="progress-row">
                    <span class="muted small">"Overall Progress"</span>
                    <span class="progress-value">{move || format!("{}%", percentage())}</span>
                </div>
                <div
                    class="progress-bar"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || percentage().to_string()
                >
                    <div class="progress-fill" style:width=move || format!("{}%", percentage())></div>
                </div>
                <input
                    type="range"
                    class="progress-slider"
                    min="0"
                    max="100"
                    step="1"
                    aria-label="Progress percentage"
                    prop:value=move || percentage().to_string()
                    prop:disabled=has_subtasks
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<u8>() {
                            draft.edit_local(|e| e.set_percentage(v));
                        }
                    }
                    on:change=move |_| {
                        if !has_subtasks() {
                            draft.push();
                            ctx.notify(format!("Progress updated to {}%", percentage()));
                        }
                    }
                />

                <div class="subtasks">
                    <h3>
                        "☑ Mini Tasks "
                        <span class="muted small">{move || {
                            let (done, total) = counts();
                            format!("({}/{})", done, total)
                        }}</span>
                    </h3>
                    <div class="subtask-add">
                        <input
                            placeholder="Add a mini task..."
                            aria-label="New mini task"
                            prop:value=move || new_title.get()
                            on:input=move |ev| set_new_title.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    add_subtask();
                                }
                            }
                        />
                        <button class="btn primary small" aria-label="Add mini task" on:click=move |_| add_subtask()>
                            "+"
                        </button>
                    </div>
                    <ul class="subtask-list">
                        {move || draft.entry.with(|e| e.subtasks.clone()).into_iter().map(|task| {
                            let id = task.id;
                            view! {
                                <li class="subtask-item" class:done=task.completed>
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=task.completed
                                            on:change=move |_| {
                                                match draft.edit(|e| e.toggle_subtask(id)).flatten() {
                                                    Some(true) => ctx.notify("Subtask completed!"),
                                                    Some(false) => ctx.notify("Subtask reopened"),
                                                    None => {}
                                                }
                                            }
                                        />
                                        <span>{task.title.clone()}</span>
                                    </label>
                                    <button
                                        class="btn ghost icon danger"
                                        aria-label="Delete mini task"
                                        on:click=move |_| {
                                            if draft.edit(|e| e.delete_subtask(id)) == Some(true) {
                                                ctx.notify("Subtask deleted");
                                            }
                                        }
                                    >
                                        "🗑"
                                    </button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                    <Show when=has_subtasks>
                        <p class="muted small">{move || {
                            let (done, total) = counts();
                            subtask_summary(done, total)
                        }}</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
