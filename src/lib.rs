//! Drag-to-resize behavior for a UI panel.
//!
//! The user drags a handle, the panel's width is clamped to a configured
//! range, persisted across sessions, and reflected live into a layout
//! variable consumed by the rest of the interface.
//!
//! # Core Components
//!
//! - **[`Resizable`]** - The interaction state machine: converts pointer
//!   movement into a bounded width with correct lifecycle management of
//!   session-scoped global listeners, cursor/selection side effects, and
//!   pointer capture
//! - **[`ResizerConfig`]** - Immutable per-instance configuration: storage
//!   key, clamp bounds, default width, layout variable name
//! - **[`Platform`]** - Seam to the ambient host services: key-value string
//!   storage, layout-variable output, global drag visuals
//!
//! On `wasm32` the [`platform::WebPlatform`] binds these services to
//! `localStorage`, a CSS custom property on the document root, and
//! `user-select`/`cursor` on the body. Everywhere else (including tests)
//! [`MemoryPlatform`] provides the same services in memory.
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//! use resizable_panel::{MemoryPlatform, Resizable, ResizerConfig};
//!
//! let platform = Rc::new(MemoryPlatform::new());
//! let panel = Resizable::new(
//!     ResizerConfig::new("files-panel-width", "--files-panel-width")
//!         .default_width(300)
//!         .width_bounds(100, 600),
//!     platform,
//! );
//!
//! panel.start_drag();
//! panel.pointer_moved(450);
//! panel.drag_ended();
//! assert_eq!(panel.width(), 450);
//! ```

mod config;
mod resizable;
mod session;
mod width;

pub mod platform;

pub use config::{OffsetProvider, ResizerConfig};
pub use platform::{MemoryPlatform, Platform};
#[cfg(target_arch = "wasm32")]
pub use platform::WebPlatform;
pub use resizable::Resizable;
pub use session::CaptureGrant;
