//! Logic Map
//!
//! Node-link editor: add labelled nodes, drag them around, click one node and
//! then another to draw a directed edge between them.

use leptos::prelude::*;
use leptos_dragdrop::{
    create_dnd_signals, make_on_container_mousemove, make_on_container_release,
    make_on_mousedown, should_suppress_click, DndSignals,
};
use proglog_core::{ClickOutcome, NodeSelection, Point};

use crate::components::EntryDraft;
use crate::context::use_app_context;

#[component]
pub fn LogicMapPanel(draft: EntryDraft) -> impl IntoView {
    let ctx = use_app_context();
    let cfg = ctx.config.with_value(|c| c.logic_map.clone());
    let selection = RwSignal::new(NodeSelection::default());
    let dnd = create_dnd_signals();
    let (new_label, set_new_label) = signal(String::new());

    let (spawn_origin, spawn_extent) = (cfg.spawn_origin, cfg.spawn_extent);
    let add_node = move || {
        let label = new_label.get_untracked();
        let at = Point::random_within(spawn_origin, spawn_extent, js_sys::Math::random);
        if let Some(Some(_)) = draft.edit(|e| e.logic_map.add_node(&label, at)) {
            set_new_label.set(String::new());
            ctx.notify("Node added");
        }
    };

    // Position follows the pointer locally; the entry is committed on release
    let drag_cfg = cfg.clone();
    let on_move = make_on_container_mousemove(dnd, move |id, pos| {
        let max = drag_cfg.max_position(pos.container_width, pos.container_height);
        let to = Point::new(pos.x, pos.y).clamped(max);
        draft.edit_local(|e| e.logic_map.move_node(id, to));
    });
    let on_release = make_on_container_release(dnd, move |id| {
        log::debug!("[LOGIC] drop node {}", id);
        draft.push();
    });

    let anchor = cfg.anchor_offset();
    let edges = move || {
        draft.entry.with(|e| {
            e.logic_map
                .edges()
                .into_iter()
                .map(|(s, t)| (s.position(), t.position()))
                .collect::<Vec<_>>()
        })
    };
    let node_ids = move || draft.entry.with(|e| e.logic_map.nodes().iter().map(|n| n.id).collect::<Vec<_>>());
    let is_empty = move || draft.entry.with(|e| e.logic_map.is_empty());

    let hint = move || {
        let selected = selection.with(|s| s.selected());
        let label = selected.and_then(|id| draft.entry.with(|e| e.logic_map.get(id).map(|n| n.label.clone())));
        match label {
            Some(label) => format!("Click another node to connect it from \"{}\"", label),
            None => "Click a node to select it, then click another node to connect them".to_string(),
        }
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">"Logic Map"</h2>
                <p class="card-description">"Map out how the pieces of this task relate"</p>
            </div>
            <div class="card-content">
                <div class="logic-map-add">
                    <input
                        placeholder="Node label..."
                        aria-label="New node label"
                        prop:value=move || new_label.get()
                        on:input=move |ev| set_new_label.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                add_node();
                            }
                        }
                    />
                    <button class="btn primary small" on:click=move |_| add_node()>"+ Add Node"</button>
                </div>
                <p class="muted small">{hint}</p>

                <div
                    class="logic-map-canvas"
                    style:width=format!("{}px", cfg.width)
                    style:height=format!("{}px", cfg.height)
                    on:mousemove=on_move
                    on:mouseup=on_release.clone()
                    on:mouseleave=on_release
                >
                    <svg class="logic-map-edges" width="100%" height="100%" aria-hidden="true">
                        <defs>
                            <marker id="arrowhead" markerWidth="10" markerHeight="7" refX="10" refY="3.5" orient="auto">
                                <polygon points="0 0, 10 3.5, 0 7" />
                            </marker>
                        </defs>
                        {move || edges().into_iter().map(|(from, to)| view! {
                            <line
                                x1=(from.x + anchor.x).to_string()
                                y1=(from.y + anchor.y).to_string()
                                x2=(to.x + anchor.x).to_string()
                                y2=(to.y + anchor.y).to_string()
                                marker-end="url(#arrowhead)"
                            />
                        }).collect_view()}
                    </svg>

                    <Show when=is_empty>
                        <div class="logic-map-empty muted">"Add nodes to start mapping"</div>
                    </Show>

                    <For each=node_ids key=|id| *id let:id>
                        <MapNode id=id draft=draft selection=selection dnd=dnd />
                    </For>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MapNode(
    id: u32,
    draft: EntryDraft,
    selection: RwSignal<NodeSelection>,
    dnd: DndSignals,
) -> impl IntoView {
    let ctx = use_app_context();

    let label = move || draft.entry.with(|e| e.logic_map.get(id).map(|n| n.label.clone()).unwrap_or_default());
    let position = move || draft.entry.with(|e| e.logic_map.get(id).map(|n| n.position()));
    let targets = move || {
        draft.entry.with(|e| {
            e.logic_map
                .resolved_targets(id)
                .into_iter()
                .map(|t| (t.id, t.label.clone()))
                .collect::<Vec<_>>()
        })
    };

    let on_click = move |_| {
        if should_suppress_click(&dnd) {
            return;
        }
        let outcome = draft
            .edit_local(|e| selection.try_update(|s| s.click(&mut e.logic_map, id)))
            .flatten();
        if let Some(ClickOutcome::Connected { .. }) = outcome {
            draft.push();
            ctx.notify("Nodes connected");
        }
    };

    view! {
        <div
            class="map-node"
            class:selected=move || selection.with(|s| s.is_selected(id))
            class:dragging=move || dnd.dragging() == Some(id)
            style:left=move || format!("{}px", position().map(|p| p.x).unwrap_or_default())
            style:top=move || format!("{}px", position().map(|p| p.y).unwrap_or_default())
            on:mousedown=make_on_mousedown(dnd, id)
            on:click=on_click
        >
            <div class="map-node-header">
                <span class="map-node-label">{label}</span>
                <button
                    class="btn ghost icon danger"
                    aria-label="Delete node"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        if draft.edit(|e| e.logic_map.delete_node(id)) == Some(true) {
                            ctx.notify("Node deleted");
                        }
                    }
                >
                    "×"
                </button>
            </div>
            <div class="map-node-links">
                {move || targets().into_iter().map(|(target, target_label)| view! {
                    <span class="badge outline small">
                        "→ "
                        {target_label}
                        <button
                            class="badge-remove"
                            aria-label="Disconnect"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                if draft.edit(|e| e.logic_map.disconnect(id, target)) == Some(true) {
                                    ctx.notify("Nodes disconnected");
                                }
                            }
                        >
                            "⛓"
                        </button>
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}
