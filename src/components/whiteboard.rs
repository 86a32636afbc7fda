//! Whiteboard
//!
//! Freehand canvas attached to an entry. The bitmap is serialized to a PNG
//! data URL after each stroke and stored on the entry.

use leptos::html;
use leptos::prelude::*;
use proglog_core::{export_file_name, Point, Sketch, StrokePen, Tool};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement};

use crate::components::EntryDraft;
use crate::context::use_app_context;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Pointer position in bitmap pixels (the canvas may be scaled by CSS)
fn canvas_point(canvas: &HtmlCanvasElement, ev: &web_sys::MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let scale = |bitmap: u32, css: f64| if css > 0.0 { bitmap as f64 / css } else { 1.0 };
    Point::new(
        (ev.client_x() as f64 - rect.left()) * scale(canvas.width(), rect.width()),
        (ev.client_y() as f64 - rect.top()) * scale(canvas.height(), rect.height()),
    )
}

fn paint_segment(
    canvas: &HtmlCanvasElement,
    from: Point,
    to: Point,
    color: &str,
    width: f64,
) -> Result<(), JsValue> {
    let ctx = context_2d(canvas)?;
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.set_line_cap("round");
    ctx.stroke();
    Ok(())
}

/// Draw a stored sketch back onto the canvas once the image has decoded
fn restore_sketch(canvas: &HtmlCanvasElement, sketch: &Sketch) -> Result<(), JsValue> {
    let ctx = context_2d(canvas)?;
    let img = HtmlImageElement::new()?;
    let loaded = img.clone();
    let onload = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = ctx.draw_image_with_html_image_element(&loaded, 0.0, 0.0) {
            log::warn!("[WHITEBOARD] restore failed: {:?}", e);
        }
    });
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    img.set_src(sketch.data_url());
    Ok(())
}

fn download(canvas: &HtmlCanvasElement, file_name: &str) -> Result<(), JsValue> {
    let url = canvas.to_data_url()?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();
    Ok(())
}

#[component]
pub fn Whiteboard(draft: EntryDraft) -> impl IntoView {
    let ctx = use_app_context();
    let cfg = ctx.config.with_value(|c| c.whiteboard.clone());
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let pen = StoredValue::new(StrokePen::default());
    let (tool, set_tool) = signal(Tool::Draw);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Some(sketch) = draft.entry.with_untracked(|e| e.sketch.clone()) {
            if let Err(e) = restore_sketch(&canvas, &sketch) {
                log::warn!("[WHITEBOARD] {:?}", e);
            }
        }
    });

    let save = move || {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        match canvas.to_data_url() {
            Ok(url) => {
                draft.edit(|e| e.sketch = Some(Sketch::from_data_url(url)));
            }
            Err(e) => log::warn!("[WHITEBOARD] serialize failed: {:?}", e),
        }
    };

    let on_down = move |ev: web_sys::MouseEvent| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            let at = canvas_point(&canvas, &ev);
            pen.update_value(|p| p.press(at));
        }
    };

    let (draw_width, erase_width) = (cfg.draw_width, cfg.erase_width);
    let on_move = move |ev: web_sys::MouseEvent| {
        // Hovering without a pressed button paints nothing
        if !pen.with_value(|p| p.is_down()) {
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let to = canvas_point(&canvas, &ev);
        if let Some(Some((from, to))) = pen.try_update_value(|p| p.drag(to)) {
            let tool = tool.get_untracked();
            let width = tool.line_width(draw_width, erase_width);
            if let Err(e) = paint_segment(&canvas, from, to, tool.stroke_color(), width) {
                log::warn!("[WHITEBOARD] {:?}", e);
            }
        }
    };

    let on_release = move |_: web_sys::MouseEvent| {
        if pen.try_update_value(|p| p.release()) == Some(true) {
            save();
        }
    };

    let clear = move |_| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        match context_2d(&canvas) {
            Ok(c) => {
                c.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
                save();
                ctx.notify("Whiteboard cleared");
            }
            Err(e) => log::warn!("[WHITEBOARD] {:?}", e),
        }
    };

    let export = move |_| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let name = draft.entry.with_untracked(|e| export_file_name(&e.name));
        match download(&canvas, &name) {
            Ok(()) => ctx.notify("Whiteboard downloaded"),
            Err(e) => log::warn!("[WHITEBOARD] download failed: {:?}", e),
        }
    };

    let tool_button = move |t: Tool, icon: &'static str, label: &'static str| {
        view! {
            <button
                class="btn small"
                class:primary=move || tool.get() == t
                class:outline=move || tool.get() != t
                aria-pressed=move || (tool.get() == t).to_string()
                on:click=move |_| set_tool.set(t)
            >
                <span aria-hidden="true">{icon}</span>
                " "
                {label}
            </button>
        }
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">"Whiteboard"</h2>
                <p class="card-description">"Sketch ideas, diagrams and flows"</p>
            </div>
            <div class="card-content">
                <div class="toolbar">
                    {tool_button(Tool::Draw, "✏", "Draw")}
                    {tool_button(Tool::Erase, "⌫", "Erase")}
                    <span class="toolbar-spacer"></span>
                    <button class="btn outline small" on:click=clear>"🗑 Clear"</button>
                    <button class="btn outline small" on:click=export>"⬇ Download"</button>
                </div>
                <canvas
                    node_ref=canvas_ref
                    class="whiteboard-canvas"
                    width=cfg.width.to_string()
                    height=cfg.height.to_string()
                    aria-label="Whiteboard drawing area"
                    on:mousedown=on_down
                    on:mousemove=on_move
                    on:mouseup=on_release
                    on:mouseleave=on_release
                ></canvas>
            </div>
        </div>
    }
}
