//! Brainstorm
//!
//! Session stopwatch plus a list of timestamped notes.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use proglog_core::Stopwatch;

use crate::components::EntryDraft;
use crate::context::use_app_context;
use crate::format::format_note_time;

#[component]
pub fn Brainstorm(draft: EntryDraft) -> impl IntoView {
    view! {
        <div class="brainstorm">
            <SessionTimer />
            <NotesPanel draft=draft />
        </div>
    }
}

#[component]
fn SessionTimer() -> impl IntoView {
    let watch = RwSignal::new(Stopwatch::default());

    let start = move |_| {
        if watch.with_untracked(|w| w.is_running()) {
            return;
        }
        let Some(run) = watch.try_update(|w| w.start()) else {
            return;
        };
        // One loop per run; it ends when the run is paused, reset or unmounted
        spawn_local(async move {
            loop {
                TimeoutFuture::new(1_000).await;
                match watch.try_update(|w| w.tick(run)) {
                    Some(true) => {}
                    _ => break,
                }
            }
        });
    };

    view! {
        <div class="card timer-card">
            <div class="card-content timer">
                <span class="timer-label muted small">"Session Timer"</span>
                <span class="timer-value" aria-live="off">{move || watch.with(|w| w.formatted())}</span>
                <div class="timer-actions">
                    <Show
                        when=move || watch.with(|w| w.is_running())
                        fallback=move || view! {
                            <button class="btn primary small" on:click=start>"▶ Start"</button>
                        }
                    >
                        <button class="btn outline small" on:click=move |_| watch.update(|w| w.pause())>
                            "⏸ Pause"
                        </button>
                    </Show>
                    <button class="btn ghost small" aria-label="Reset timer" on:click=move |_| watch.update(|w| w.reset())>
                        "↺"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NotesPanel(draft: EntryDraft) -> impl IntoView {
    let ctx = use_app_context();
    let (new_note, set_new_note) = signal(String::new());

    let add_note = move || {
        let content = new_note.get_untracked();
        if let Some(Some(_)) = draft.edit(|e| e.add_note(&content, Utc::now())) {
            set_new_note.set(String::new());
            ctx.notify("Note added");
        }
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">"Brainstorm Notes"</h2>
                <p class="card-description">"Capture thoughts as they come. Ctrl+Enter to add."</p>
            </div>
            <div class="card-content">
                <textarea
                    rows="3"
                    placeholder="Write down an idea..."
                    aria-label="New note"
                    prop:value=move || new_note.get()
                    on:input=move |ev| set_new_note.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && ev.ctrl_key() {
                            ev.prevent_default();
                            add_note();
                        }
                    }
                ></textarea>
                <button class="btn primary small" on:click=move |_| add_note()>"+ Add Note"</button>

                <ul class="note-list">
                    {move || {
                        let notes = draft.entry.with(|e| e.notes.clone());
                        if notes.is_empty() {
                            return view! {
                                <li class="muted small empty-state">"No notes yet."</li>
                            }.into_any();
                        }
                        notes.into_iter().map(|note| {
                            let id = note.id;
                            view! {
                                <li class="note-item">
                                    <p class="note-content">{note.content.clone()}</p>
                                    <div class="note-footer">
                                        <span class="muted small">{format_note_time(&note.created_at)}</span>
                                        <button
                                            class="btn ghost icon danger"
                                            aria-label="Delete note"
                                            on:click=move |_| {
                                                if draft.edit(|e| e.delete_note(id)) == Some(true) {
                                                    ctx.notify("Note deleted");
                                                }
                                            }
                                        >
                                            "🗑"
                                        </button>
                                    </div>
                                </li>
                            }
                        }).collect_view().into_any()
                    }}
                </ul>
            </div>
        </div>
    }
}
