//! Drag session guards.
//!
//! Everything a drag session acquires globally (cursor/selection visuals,
//! pointer capture, document-level listeners) is modeled as a scoped
//! acquisition released on `Drop`, so every exit path - an end event,
//! an explicit cancel, or the owning state machine being dropped mid-drag -
//! performs identical cleanup.

use std::rc::Rc;

use crate::platform::Platform;

/// Outcome of the best-effort pointer capture attempt at drag start.
///
/// Pointer capture routes subsequent pointer events to a single target
/// regardless of cursor position, making dragging robust to fast movement
/// leaving the handle's bounds. Not all input devices and browsers support
/// it; an unavailable capture is a degraded-but-working mode since the drag
/// still tracks via the session's global listeners.
pub enum CaptureGrant {
    /// Capture acquired; released when the session ends.
    #[cfg(target_arch = "wasm32")]
    Captured {
        target: web_sys::Element,
        pointer_id: i32,
    },
    /// Capture unsupported or refused by the host. Never an error.
    Unavailable,
}

#[cfg(target_arch = "wasm32")]
impl Drop for CaptureGrant {
    fn drop(&mut self) {
        if let CaptureGrant::Captured { target, pointer_id } = self {
            // Best-effort: the host may have released the capture already.
            let _ = target.release_pointer_capture(*pointer_id);
        }
    }
}

/// Global visual side effects of an active drag, reverted on drop.
pub(crate) struct DragVisuals {
    platform: Rc<dyn Platform>,
}

impl DragVisuals {
    pub(crate) fn acquire(platform: Rc<dyn Platform>) -> Self {
        platform.begin_drag_visuals();
        Self { platform }
    }
}

impl Drop for DragVisuals {
    fn drop(&mut self) {
        self.platform.end_drag_visuals();
    }
}

/// One open drag gesture. Exists only between interaction-start and
/// interaction-end; dropping it releases, in order, the pointer capture,
/// the session-scoped global listeners, and the drag visuals.
pub(crate) struct DragSession {
    origin_offset: i32,
    #[cfg(target_arch = "wasm32")]
    _capture: CaptureGrant,
    #[cfg(target_arch = "wasm32")]
    _listeners: Option<crate::platform::web::GlobalListeners>,
    _visuals: DragVisuals,
}

impl DragSession {
    pub(crate) fn open(origin_offset: i32, platform: Rc<dyn Platform>) -> Self {
        Self {
            origin_offset,
            #[cfg(target_arch = "wasm32")]
            _capture: CaptureGrant::Unavailable,
            #[cfg(target_arch = "wasm32")]
            _listeners: None,
            _visuals: DragVisuals::acquire(platform),
        }
    }

    /// Offset snapshotted once at session start; `pointerX - origin_offset`
    /// is the raw width candidate for every move event.
    pub(crate) fn origin_offset(&self) -> i32 {
        self.origin_offset
    }
}

#[cfg(target_arch = "wasm32")]
impl DragSession {
    pub(crate) fn grant_capture(&mut self, grant: CaptureGrant) {
        self._capture = grant;
    }

    pub(crate) fn attach_listeners(&mut self, listeners: crate::platform::web::GlobalListeners) {
        self._listeners = Some(listeners);
    }
}
