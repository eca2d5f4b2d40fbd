//! Web platform implementation using web-sys.
//!
//! Binds the resizer's ambient services to the real document: width
//! persistence in `localStorage`, the layout variable as a CSS custom
//! property on `document.documentElement`, and drag visuals as
//! `user-select`/`cursor` on `document.body`. All host failures degrade
//! locally; nothing propagates to the caller.

use std::rc::Weak;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::platform::Platform;
use crate::resizable::ResizerState;
use crate::session::CaptureGrant;

/// [`Platform`] backed by the browser document.
#[derive(Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    pub fn new() -> Self {
        Self
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

pub(crate) fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(_) => {
            warn("resizable-panel: localStorage is unavailable");
            None
        }
    }
}

fn body_style() -> Option<web_sys::CssStyleDeclaration> {
    document().and_then(|document| document.body()).map(|body| body.style())
}

impl Platform for WebPlatform {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn store(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                warn("resizable-panel: failed to persist panel width");
            }
        }
    }

    fn set_layout_variable(&self, name: &str, value: &str) {
        let root = document()
            .and_then(|document| document.document_element())
            .and_then(|root| root.dyn_into::<web_sys::HtmlElement>().ok());
        let Some(root) = root else { return };
        if root.style().set_property(name, value).is_err() {
            warn("resizable-panel: failed to update layout variable");
        }
    }

    fn begin_drag_visuals(&self) {
        if let Some(style) = body_style() {
            let _ = style.set_property("user-select", "none");
            let _ = style.set_property("cursor", "col-resize");
        }
    }

    fn end_drag_visuals(&self) {
        // Reset to empty/default rather than snapshot-and-restore.
        if let Some(style) = body_style() {
            let _ = style.remove_property("user-select");
            let _ = style.remove_property("cursor");
        }
    }
}

/// Attempt exclusive pointer capture on the interaction target.
///
/// Capability-checked optional operation: absent or throwing
/// `setPointerCapture` yields [`CaptureGrant::Unavailable`] and the drag
/// continues without capture.
pub(crate) fn try_pointer_capture(event: &web_sys::Event) -> CaptureGrant {
    let Some(target) = event
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return CaptureGrant::Unavailable;
    };

    let supported =
        js_sys::Reflect::has(target.as_ref(), &JsValue::from_str("setPointerCapture"))
            .unwrap_or(false);
    if !supported {
        return CaptureGrant::Unavailable;
    }

    // Legacy mouse events carry no pointerId; 0 matches the primary pointer
    // fallback browsers use.
    let pointer_id = event
        .dyn_ref::<web_sys::PointerEvent>()
        .map(|pointer| pointer.pointer_id())
        .unwrap_or(0);

    match target.set_pointer_capture(pointer_id) {
        Ok(()) => CaptureGrant::Captured { target, pointer_id },
        Err(_) => CaptureGrant::Unavailable,
    }
}

const MOVE_EVENTS: [&str; 2] = ["mousemove", "pointermove"];
const END_EVENTS: [&str; 2] = ["mouseup", "pointerup"];

/// Session-scoped move/end listeners on the document.
///
/// Both the legacy mouse family and the unified pointer family are
/// registered concurrently: devices and browsers vary in which family they
/// deliver during a single physical drag, and a missed end event must not
/// wedge the session in a dragging state. Either family terminates the
/// session.
///
/// Listeners are removed on drop; they must never outlive the session that
/// registered them. Closures hold only a weak reference to the state
/// machine so the session stored inside it does not form a cycle.
pub(crate) struct GlobalListeners {
    document: web_sys::Document,
    move_closure: Closure<dyn FnMut(web_sys::Event)>,
    end_closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl GlobalListeners {
    pub(crate) fn attach(document: web_sys::Document, state: Weak<ResizerState>) -> Self {
        let move_closure = Closure::wrap(Box::new({
            let state = state.clone();
            move |event: web_sys::Event| {
                // Suppress native text-selection/drag artifacts while resizing.
                event.prevent_default();
                let Some(state) = state.upgrade() else { return };
                // PointerEvent inherits the MouseEvent interface, so clientX
                // reads the same way for both families.
                if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
                    state.track_pointer(mouse.client_x());
                }
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        let end_closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(state) = state.upgrade() {
                state.close_session();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        for name in MOVE_EVENTS {
            let _ = document
                .add_event_listener_with_callback(name, move_closure.as_ref().unchecked_ref());
        }
        for name in END_EVENTS {
            let _ = document
                .add_event_listener_with_callback(name, end_closure.as_ref().unchecked_ref());
        }

        Self {
            document,
            move_closure,
            end_closure,
        }
    }
}

impl Drop for GlobalListeners {
    fn drop(&mut self) {
        for name in MOVE_EVENTS {
            let _ = self
                .document
                .remove_event_listener_with_callback(name, self.move_closure.as_ref().unchecked_ref());
        }
        for name in END_EVENTS {
            let _ = self
                .document
                .remove_event_listener_with_callback(name, self.end_closure.as_ref().unchecked_ref());
        }
    }
}
