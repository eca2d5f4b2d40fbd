//! Platform abstraction layer for the resizer.
//!
//! Provides a unified interface to the ambient host services the state
//! machine synchronizes into: persisted key-value storage, the layout
//! variable consumed by external rendering, and the global visual side
//! effects of an active drag.
//!
//! On `wasm32` the [`WebPlatform`] binds these to the real document;
//! [`MemoryPlatform`] backs tests and windowless hosts.

/// Ambient host services consumed by the resizer.
///
/// All operations are infallible from the caller's perspective;
/// implementations recover from host failures internally (a storage write
/// that fails simply does not persist).
pub trait Platform {
    /// Read the persisted string under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`. Best-effort.
    fn store(&self, key: &str, value: &str);

    /// Publish the layout variable `name` with the given value
    /// (e.g. `"450px"`), read reactively by external layout.
    fn set_layout_variable(&self, name: &str, value: &str);

    /// Apply the global visuals of an active drag: suppress text selection
    /// and show a resize cursor at the application-root level.
    fn begin_drag_visuals(&self);

    /// Revert the global drag visuals to the empty/default state.
    fn end_drag_visuals(&self);
}

pub mod memory;
pub use memory::MemoryPlatform;

#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(target_arch = "wasm32")]
pub use web::WebPlatform;
