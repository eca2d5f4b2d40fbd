//! The resizer state machine.
//!
//! Two states, `Idle` and `Dragging`, cycling indefinitely. A drag session
//! owns everything acquired globally for its duration; width changes are
//! clamped before they become observable and synchronized outward (persisted
//! storage, layout variable) as a byproduct of the state transition, not as
//! separate imperative calls at call sites.
//!
//! All event processing is synchronous: each inbound event completes its
//! state mutation and side-effect synchronization before returning, in the
//! order the host event loop delivers events. No throttling or batching.

use std::cell::RefCell;
use std::rc::Rc;

use futures_signals::signal::{Mutable, Signal};

use crate::config::ResizerConfig;
use crate::platform::Platform;
use crate::session::DragSession;
use crate::width::{clamp_width, restore_width};

/// Drag-to-resize state machine for one panel.
///
/// Cheap to clone; clones share the same state. Dropping the last clone
/// mid-drag performs the same cleanup as an interaction-end event: the
/// session's global listeners, pointer capture, and visuals never outlive
/// the owning context.
#[derive(Clone)]
pub struct Resizable {
    state: Rc<ResizerState>,
}

impl Resizable {
    /// Create a resizer, restoring the width persisted under
    /// `config.storage_key` or falling back to `config.default_width` when
    /// the entry is absent or malformed.
    ///
    /// The initial width is published immediately: persisted back and
    /// reflected into the layout variable. Restored values are not
    /// re-clamped against the current bounds (see [`ResizerConfig`]).
    ///
    /// Bounds sanity is checked in debug builds only.
    pub fn new(config: ResizerConfig, platform: Rc<dyn Platform>) -> Self {
        debug_assert!(
            config.min_width <= config.max_width,
            "min_width must not exceed max_width"
        );
        debug_assert!(
            config.min_width <= config.default_width && config.default_width <= config.max_width,
            "default_width must lie within the clamp bounds"
        );

        let width = restore_width(platform.as_ref(), &config);
        let state = Rc::new(ResizerState {
            config,
            platform,
            width: Mutable::new(width),
            is_resizing: Mutable::new(false),
            session: RefCell::new(None),
        });
        state.publish(width);
        Self { state }
    }

    /// Current panel width in pixels.
    pub fn width(&self) -> i32 {
        self.state.width.get()
    }

    /// Reactive width, for binding the panel's rendering.
    pub fn width_signal(&self) -> impl Signal<Item = i32> + use<> {
        self.state.width.signal()
    }

    /// Whether a drag session is currently open.
    pub fn is_resizing(&self) -> bool {
        self.state.is_resizing.get()
    }

    /// Reactive drag flag, e.g. for highlighting the handle while dragging.
    pub fn is_resizing_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state.is_resizing.signal()
    }

    /// Open a drag session: snapshot the origin offset and apply the global
    /// drag visuals. Host-agnostic entry; on the web prefer
    /// [`Resizable::begin_drag`], which additionally acquires pointer
    /// capture and registers the document-level listeners.
    ///
    /// An already-open session is closed first, so at most one session ever
    /// holds the global resources.
    pub fn start_drag(&self) {
        self.state.open_session();
    }

    /// Feed a move event's horizontal coordinate. Ignored while idle;
    /// while dragging, `client_x - origin_offset` becomes the clamped width.
    pub fn pointer_moved(&self, client_x: i32) {
        self.state.track_pointer(client_x);
    }

    /// Close the drag session on an interaction-end event. No-op while idle.
    pub fn drag_ended(&self) {
        self.state.close_session();
    }

    /// Forced teardown, identical cleanup to [`Resizable::drag_ended`].
    /// Dropping the last clone of this resizer does the same implicitly.
    pub fn cancel_drag(&self) {
        self.state.close_session();
    }
}

#[cfg(target_arch = "wasm32")]
impl Resizable {
    /// Begin a drag from the handle's `mousedown`/`pointerdown` event.
    ///
    /// Gates on the primary button, prevents the default action, opens the
    /// session, attempts best-effort pointer capture on the event's current
    /// target, and registers the session-scoped document listeners for both
    /// event families.
    pub fn begin_drag(&self, event: &web_sys::Event) {
        use wasm_bindgen::JsCast;

        use crate::platform::web::{self, GlobalListeners};

        if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
            if mouse.button() != 0 {
                return;
            }
        }
        event.prevent_default();

        self.state.open_session();

        let grant = web::try_pointer_capture(event);
        let listeners = web::document()
            .map(|document| GlobalListeners::attach(document, Rc::downgrade(&self.state)));
        if let Some(session) = self.state.session.borrow_mut().as_mut() {
            session.grant_capture(grant);
            if let Some(listeners) = listeners {
                session.attach_listeners(listeners);
            }
        }
    }
}

pub(crate) struct ResizerState {
    config: ResizerConfig,
    platform: Rc<dyn Platform>,
    width: Mutable<i32>,
    is_resizing: Mutable<bool>,
    session: RefCell<Option<DragSession>>,
}

impl ResizerState {
    fn open_session(&self) {
        // Release the previous session's globals before the new session
        // acquires them.
        self.close_session();

        let origin_offset = self.config.origin_offset();
        *self.session.borrow_mut() =
            Some(DragSession::open(origin_offset, Rc::clone(&self.platform)));
        self.is_resizing.set_neq(true);
    }

    pub(crate) fn track_pointer(&self, client_x: i32) {
        let origin_offset = match self.session.borrow().as_ref() {
            Some(session) => session.origin_offset(),
            None => return,
        };
        self.set_width(client_x - origin_offset);
    }

    pub(crate) fn close_session(&self) {
        let session = self.session.borrow_mut().take();
        if session.is_some() {
            self.is_resizing.set_neq(false);
        }
        // Session guards release here: capture, listeners, visuals.
    }

    fn set_width(&self, candidate: i32) {
        let clamped = clamp_width(candidate, self.config.min_width, self.config.max_width);
        if self.width.get() != clamped {
            self.width.set(clamped);
            self.publish(clamped);
        }
    }

    fn publish(&self, width: i32) {
        self.platform.store(&self.config.storage_key, &width.to_string());
        self.platform
            .set_layout_variable(&self.config.layout_variable, &format!("{width}px"));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::StreamExt;
    use futures_signals::signal::SignalExt;

    use super::*;
    use crate::platform::MemoryPlatform;

    fn panel(platform: &Rc<MemoryPlatform>) -> Resizable {
        Resizable::new(
            ResizerConfig::new("panel-width", "--panel-width")
                .default_width(300)
                .width_bounds(100, 600),
            Rc::clone(platform) as Rc<dyn Platform>,
        )
    }

    #[test]
    fn initial_width_is_published_outward() {
        let platform = Rc::new(MemoryPlatform::new());
        let panel = panel(&platform);

        assert_eq!(panel.width(), 300);
        assert_eq!(platform.stored("panel-width").as_deref(), Some("300"));
        assert_eq!(
            platform.layout_variable("--panel-width").as_deref(),
            Some("300px")
        );
    }

    #[test]
    fn restores_persisted_width() {
        let platform = Rc::new(MemoryPlatform::new());
        platform.seed("panel-width", "450");

        assert_eq!(panel(&platform).width(), 450);
    }

    #[test]
    fn stale_persisted_width_survives_until_the_next_drag() {
        let platform = Rc::new(MemoryPlatform::new());
        platform.seed("panel-width", "900");
        let panel = panel(&platform);

        // Saved under looser bounds in the past; kept as-is on load.
        assert_eq!(panel.width(), 900);

        panel.start_drag();
        panel.pointer_moved(650);
        assert_eq!(panel.width(), 600);
    }

    #[test]
    fn drag_flag_transitions() {
        let platform = Rc::new(MemoryPlatform::new());
        let panel = panel(&platform);

        assert!(!panel.is_resizing());
        panel.start_drag();
        assert!(panel.is_resizing());
        panel.drag_ended();
        assert!(!panel.is_resizing());

        panel.start_drag();
        assert!(panel.is_resizing());
        panel.cancel_drag();
        assert!(!panel.is_resizing());
    }

    #[test]
    fn moves_track_width_through_the_origin_offset() {
        let platform = Rc::new(MemoryPlatform::new());
        let panel = Resizable::new(
            ResizerConfig::new("panel-width", "--panel-width")
                .default_width(300)
                .width_bounds(100, 600)
                .offset_provider(|| 50),
            Rc::clone(&platform) as Rc<dyn Platform>,
        );

        panel.start_drag();
        panel.pointer_moved(500);
        assert_eq!(panel.width(), 450);

        panel.pointer_moved(50);
        assert_eq!(panel.width(), 100);
    }

    #[test]
    fn origin_offset_is_snapshotted_per_session() {
        let platform = Rc::new(MemoryPlatform::new());
        let offset = Rc::new(Cell::new(50));
        let panel = Resizable::new(
            ResizerConfig::new("panel-width", "--panel-width")
                .default_width(300)
                .width_bounds(100, 600)
                .offset_provider({
                    let offset = Rc::clone(&offset);
                    move || offset.get()
                }),
            Rc::clone(&platform) as Rc<dyn Platform>,
        );

        panel.start_drag();
        panel.pointer_moved(500);
        assert_eq!(panel.width(), 450);
        panel.drag_ended();

        // The offset changes between sessions; only the new session sees it.
        offset.set(100);
        panel.start_drag();
        panel.pointer_moved(500);
        assert_eq!(panel.width(), 400);
    }

    #[test]
    fn moves_are_ignored_outside_a_session() {
        let platform = Rc::new(MemoryPlatform::new());
        let panel = panel(&platform);

        panel.pointer_moved(500);
        assert_eq!(panel.width(), 300);

        panel.start_drag();
        panel.pointer_moved(500);
        assert_eq!(panel.width(), 500);
        panel.drag_ended();

        panel.pointer_moved(200);
        assert_eq!(panel.width(), 500);

        panel.start_drag();
        panel.cancel_drag();
        panel.pointer_moved(200);
        assert_eq!(panel.width(), 500);
    }

    #[test]
    fn every_width_change_is_persisted_and_reflected() {
        let platform = Rc::new(MemoryPlatform::new());
        let panel = panel(&platform);

        panel.start_drag();
        for client_x in [180, 420, 9000, 42, 333] {
            panel.pointer_moved(client_x);
            let stored = platform.stored("panel-width").unwrap();
            assert_eq!(stored.parse::<i32>().unwrap(), panel.width());
            assert_eq!(
                platform.layout_variable("--panel-width").unwrap(),
                format!("{}px", panel.width())
            );
        }
        panel.drag_ended();
        assert_eq!(
            platform.stored("panel-width").as_deref(),
            Some("333")
        );
    }

    #[test]
    fn instances_with_distinct_keys_are_isolated() {
        let platform = Rc::new(MemoryPlatform::new());
        let left = Resizable::new(
            ResizerConfig::new("key-a", "--panel-a")
                .default_width(300)
                .width_bounds(100, 600),
            Rc::clone(&platform) as Rc<dyn Platform>,
        );
        let right = Resizable::new(
            ResizerConfig::new("key-b", "--panel-b")
                .default_width(300)
                .width_bounds(100, 600),
            Rc::clone(&platform) as Rc<dyn Platform>,
        );

        left.start_drag();
        left.pointer_moved(200);
        left.drag_ended();
        right.start_drag();
        right.pointer_moved(400);
        right.drag_ended();

        assert_eq!(platform.stored("key-a").as_deref(), Some("200"));
        assert_eq!(platform.stored("key-b").as_deref(), Some("400"));
        assert_eq!(left.width(), 200);
        assert_eq!(right.width(), 400);
    }

    #[test]
    fn drag_visuals_follow_the_session() {
        let platform = Rc::new(MemoryPlatform::new());
        let panel = panel(&platform);

        assert!(!platform.drag_visuals_active());
        panel.start_drag();
        assert!(platform.drag_visuals_active());
        panel.drag_ended();
        assert!(!platform.drag_visuals_active());
    }

    #[test]
    fn forced_teardown_releases_the_open_session() {
        let platform = Rc::new(MemoryPlatform::new());
        let panel = panel(&platform);

        panel.start_drag();
        assert!(platform.drag_visuals_active());

        drop(panel);
        assert!(!platform.drag_visuals_active());
    }

    #[test]
    fn restarting_a_drag_replaces_the_open_session() {
        let platform = Rc::new(MemoryPlatform::new());
        let panel = panel(&platform);

        panel.start_drag();
        panel.start_drag();
        assert!(panel.is_resizing());
        assert!(platform.drag_visuals_active());

        panel.drag_ended();
        assert!(!panel.is_resizing());
        assert!(!platform.drag_visuals_active());
    }

    #[tokio::test]
    async fn signals_reflect_current_state() {
        let platform = Rc::new(MemoryPlatform::new());
        let panel = panel(&platform);

        panel.start_drag();
        panel.pointer_moved(450);

        let width = panel.width_signal().to_stream().next().await.unwrap();
        assert_eq!(width, 450);
        let resizing = panel.is_resizing_signal().to_stream().next().await.unwrap();
        assert!(resizing);

        panel.drag_ended();
        let resizing = panel.is_resizing_signal().to_stream().next().await.unwrap();
        assert!(!resizing);
    }
}
