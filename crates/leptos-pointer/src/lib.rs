//! Leptos Pointer Utilities
//!
//! Hover tracking and outside-mousedown detection for Leptos components.
//! Document-level listeners registered here are scoped to the reactive owner
//! that created them and are removed when that owner is cleaned up.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Hover state signals for one element
#[derive(Clone, Copy)]
pub struct HoverSignals {
    pub hovering_read: ReadSignal<bool>,
    pub hovering_write: WriteSignal<bool>,
}

pub fn create_hover_signals() -> HoverSignals {
    let (hovering_read, hovering_write) = signal(false);
    HoverSignals {
        hovering_read,
        hovering_write,
    }
}

/// Create mouseenter handler that marks the element as hovered
pub fn make_on_mouseenter(hover: HoverSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        hover.hovering_write.set(true);
    }
}

/// Create mouseleave handler that clears the hover flag
pub fn make_on_mouseleave(hover: HoverSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        hover.hovering_write.set(false);
    }
}

/// True when the event target is not `container` or one of its descendants.
/// Events without a node target count as outside.
pub fn is_outside(container: &web_sys::Node, ev: &web_sys::Event) -> bool {
    match ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) {
        Some(node) => !container.contains(Some(&node)),
        None => true,
    }
}

/// Bind a global mousedown handler that fires when a press lands outside `target`.
///
/// Call this from a component body: the listener is attached immediately and
/// removed in `on_cleanup`, so it lives exactly as long as the component.
/// `on_outside` runs at event time, so anything it reads untracked is current.
/// Presses before `target` is mounted are ignored.
pub fn bind_mousedown_outside<F>(target: NodeRef<html::Div>, on_outside: F)
where
    F: Fn() + 'static,
{
    bind_mousedown_outside_of(
        move || target.get_untracked().map(web_sys::Node::from),
        on_outside,
    );
}

/// Same as [`bind_mousedown_outside`] for a container resolved by `container`
/// on every press. `None` means "not mounted yet" and ignores the press.
pub fn bind_mousedown_outside_of<C, F>(container: C, on_outside: F)
where
    C: Fn() -> Option<web_sys::Node> + 'static,
    F: Fn() + 'static,
{
    let handle = window_event_listener(ev::mousedown, move |ev: web_sys::MouseEvent| {
        let Some(node) = container() else {
            return;
        };
        if is_outside(&node, &ev) {
            on_outside();
        }
    });
    on_cleanup(move || handle.remove());
}
