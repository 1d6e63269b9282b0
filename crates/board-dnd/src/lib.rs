//! Board DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events, generic over a
//! typed drag item `D` and drop target `T`. Handing typed variants to the
//! drop handler (instead of string ids parsed by prefix) keeps stale-id
//! handling in one place: the consumer's reconciler.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
pub struct DndSignals<D: Send + Sync + 'static, T: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<D>>,
    pub dragging_write: WriteSignal<Option<D>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<D>>,
    pub pending_write: WriteSignal<Option<D>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

// Signals are arena handles, so the struct copies regardless of D and T;
// the derive would demand D: Copy, T: Copy.
impl<D: Send + Sync + 'static, T: Send + Sync + 'static> Clone for DndSignals<D, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<D: Send + Sync + 'static, T: Send + Sync + 'static> Copy for DndSignals<D, T> {}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<D, T>() -> DndSignals<D, T>
where
    D: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<D>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<D>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<D, T>(dnd: &DndSignals<D, T>)
where
    D: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<D, T>(dnd: DndSignals<D, T>, item: D) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    D: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input, textarea or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_write.set(Some(item.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<D, T>(dnd: DndSignals<D, T>)
where
    D: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for drop targets.
/// Self-drops are not filtered here; the consumer's reconciler absorbs them.
pub fn make_on_target_mouseenter<D, T>(dnd: DndSignals<D, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    D: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(|d| d.is_some()) {
            dnd.drop_target_write.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<D, T>(dnd: DndSignals<D, T>) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    D: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(|d| d.is_some()) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// The listener is registered on the document and never removed, so this
/// must be called once, from the scope that owns `dnd` — binding it in a
/// component that unmounts would leave the listener reading disposed
/// signals.
pub fn bind_global_mouseup<D, T, F>(dnd: DndSignals<D, T>, on_drop: F)
where
    D: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn(D, T) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(target)) = (dragging, drop_target) {
            end_drag(&dnd);
            on_drop(dragged, target);
        } else {
            // Not dragging - just end any pending state
            end_drag(&dnd);
            // Click event will fire naturally on the element
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;

    // The global listeners live for the page's lifetime, so the signal
    // bundle has to be owned by a scope that is never disposed. Signals
    // created in a long-lived owner must stay readable after a child
    // scope (a mounted-and-unmounted view) goes away.
    #[test]
    fn test_signals_outlive_a_disposed_child_scope() {
        let app_owner = Owner::new();
        let dnd = app_owner.with(create_dnd_signals::<u32, u32>);

        let view_owner = app_owner.with(Owner::new);
        view_owner.with(|| {
            dnd.pending_write.set(Some(7));
            dnd.start_x_write.set(12);
        });
        drop(view_owner);

        assert_eq!(dnd.pending_read.get_untracked(), Some(7));
        assert_eq!(dnd.start_x_read.get_untracked(), 12);
    }
}
