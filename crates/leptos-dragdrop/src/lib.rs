//! Leptos DragDrop Utilities
//!
//! Drag freely positioned elements (e.g. nodes on a canvas) with mouse events.
//! Uses a movement threshold to distinguish click from drag, and reports
//! positions relative to the container the element is dragged in.
//!
//! The press / move / release bookkeeping lives in [`DragTracker`], which has
//! no DOM dependency; the handlers below only feed it mouse coordinates.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the click following a drop is ignored
const CLICK_SUPPRESS_MS: i32 = 100;

/// True once the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    (now.0 - start.0).abs() > DRAG_THRESHOLD_PX || (now.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// Press / drag / drop state of one container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragTracker {
    /// Pressed but not yet moved past the threshold
    pending: Option<u32>,
    dragging: Option<u32>,
    /// Client position of the press
    start: (i32, i32),
    /// A drag just ended; the click that follows belongs to it
    just_ended: bool,
}

impl DragTracker {
    pub fn press(&mut self, id: u32, at: (i32, i32)) {
        self.pending = Some(id);
        self.start = at;
    }

    /// Pointer moved. Returns the element to reposition, if a drag is active.
    pub fn move_to(&mut self, at: (i32, i32)) -> Option<u32> {
        if self.dragging.is_none() && self.pending.is_some() && exceeds_threshold(self.start, at) {
            self.dragging = self.pending;
        }
        self.dragging
    }

    /// Pointer released or left the container. Returns the dropped element
    /// when a real drag (not a click) ended.
    pub fn release(&mut self) -> Option<u32> {
        self.pending = None;
        let dropped = self.dragging.take();
        if dropped.is_some() {
            self.just_ended = true;
        }
        dropped
    }

    pub fn dragging(&self) -> Option<u32> {
        self.dragging
    }

    /// True right after a drop; the click that follows should be ignored
    pub fn suppresses_click(&self) -> bool {
        self.just_ended
    }

    /// Stop suppressing clicks
    pub fn settle(&mut self) {
        self.just_ended = false;
    }
}

/// Position of a dragged element inside its container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragPosition {
    /// Proposed top-left corner, container-relative, not clamped
    pub x: f64,
    pub y: f64,
    pub container_width: f64,
    pub container_height: f64,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub tracker: RwSignal<DragTracker>,
    /// Pointer offset from the element's top-left corner
    pub grab_offset: RwSignal<(f64, f64)>,
}

impl DndSignals {
    /// Element being dragged (tracked)
    pub fn dragging(&self) -> Option<u32> {
        self.tracker.with(|t| t.dragging())
    }
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        tracker: RwSignal::new(DragTracker::default()),
        grab_offset: RwSignal::new((0.0, 0.0)),
    }
}

/// True right after a drag ended; the click that follows a drop should be ignored
pub fn should_suppress_click(dnd: &DndSignals) -> bool {
    dnd.tracker.with_untracked(|t| t.suppresses_click())
}

fn schedule_settle(dnd: &DndSignals) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let tracker = dnd.tracker;
    let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
        tracker.try_update(|t| t.settle());
    });
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        CLICK_SUPPRESS_MS,
    );
    cb.forget();
}

/// Create mousedown handler for a draggable element.
/// Records a pending drag with the start position and grab offset.
pub fn make_on_mousedown(dnd: DndSignals, element_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on controls inside the element
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        let offset = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                (ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top())
            })
            .unwrap_or((0.0, 0.0));

        dnd.tracker.update(|t| t.press(element_id, (ev.client_x(), ev.client_y())));
        dnd.grab_offset.set(offset);
    }
}

/// Create mousemove handler for the container.
/// Promotes a pending press to a drag past the threshold, then reports the
/// dragged element's proposed position on every move.
pub fn make_on_container_mousemove<F>(dnd: DndSignals, on_move: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(u32, DragPosition) + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let at = (ev.client_x(), ev.client_y());
        // Only write the signal when the drag state actually changes
        let was = dnd.tracker.with_untracked(|t| *t);
        let mut next = was;
        let Some(dragged) = next.move_to(at) else {
            return;
        };
        if next != was {
            dnd.tracker.set(next);
        }
        let Some(container) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = container.get_bounding_client_rect();
        let (off_x, off_y) = dnd.grab_offset.get_untracked();
        on_move(
            dragged,
            DragPosition {
                x: ev.client_x() as f64 - rect.left() - off_x,
                y: ev.client_y() as f64 - rect.top() - off_y,
                container_width: rect.width(),
                container_height: rect.height(),
            },
        );
    }
}

/// Create mouseup / mouseleave handler for the container.
/// Calls `on_release` only when a real drag (not a click) ends.
pub fn make_on_container_release<F>(dnd: DndSignals, on_release: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(u32) + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if let Some(dropped) = dnd.tracker.try_update(|t| t.release()).flatten() {
            schedule_settle(&dnd);
            on_release(dropped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_small_move_is_a_click() {
        let mut t = DragTracker::default();
        t.press(7, (100, 100));
        assert_eq!(t.move_to((103, 104)), None);
        assert_eq!(t.release(), None);
        // The click is the user's, not the tail of a drag
        assert!(!t.suppresses_click());
    }

    #[test]
    fn test_drag_reports_moves_and_drops_once() {
        let mut t = DragTracker::default();
        t.press(7, (100, 100));
        assert_eq!(t.move_to((110, 100)), Some(7));
        assert_eq!(t.move_to((150, 130)), Some(7));
        assert_eq!(t.dragging(), Some(7));

        // Moves never drop; only release hands the element back
        assert_eq!(t.release(), Some(7));
        assert_eq!(t.dragging(), None);
        // Leaving the container after the mouseup drops nothing more
        assert_eq!(t.release(), None);
    }

    #[test]
    fn test_click_after_drop_is_suppressed_until_settled() {
        let mut t = DragTracker::default();
        t.press(3, (0, 0));
        t.move_to((20, 0));
        t.release();
        assert!(t.suppresses_click());

        t.settle();
        assert!(!t.suppresses_click());
    }

    #[test]
    fn test_move_without_press_does_nothing() {
        let mut t = DragTracker::default();
        assert_eq!(t.move_to((500, 500)), None);
        assert_eq!(t.release(), None);
        assert_eq!(t, DragTracker::default());
    }
}
