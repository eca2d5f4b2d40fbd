//! Per-instance resizer configuration.
//!
//! Configuration is immutable for the lifetime of one [`Resizable`]
//! instance. Bounds sanity (`min_width <= default_width <= max_width`) is
//! enforced in debug builds only; release builds preserve permissive
//! behavior and let the clamp produce whatever it naturally produces.
//!
//! [`Resizable`]: crate::Resizable

use std::fmt;
use std::rc::Rc;

/// Callback returning the caller-relevant coordinate offset at drag start,
/// e.g. to account for a scrolled or nested container.
pub type OffsetProvider = Rc<dyn Fn() -> i32>;

/// Immutable configuration for one resizable panel.
///
/// Built fluently, in the style of the component APIs this crate sits
/// alongside:
///
/// ```rust
/// use resizable_panel::ResizerConfig;
///
/// let config = ResizerConfig::new("files-panel-width", "--files-panel-width")
///     .default_width(300)
///     .width_bounds(100, 600);
/// ```
#[derive(Clone)]
pub struct ResizerConfig {
    /// Key under which the width is persisted as a base-10 integer string.
    pub storage_key: String,
    /// Width used when no persisted value exists or it fails to parse.
    pub default_width: i32,
    /// Lower clamp bound, pixels.
    pub min_width: i32,
    /// Upper clamp bound, pixels.
    pub max_width: i32,
    /// Name of the layout variable written as `"<width>px"` on every change.
    pub layout_variable: String,
    /// Optional origin-offset callback, snapshotted once per drag session.
    pub offset_provider: Option<OffsetProvider>,
}

impl ResizerConfig {
    pub fn new(storage_key: impl Into<String>, layout_variable: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            default_width: 300,
            min_width: 0,
            max_width: i32::MAX,
            layout_variable: layout_variable.into(),
            offset_provider: None,
        }
    }

    pub fn default_width(mut self, width: i32) -> Self {
        self.default_width = width;
        self
    }

    pub fn width_bounds(mut self, min_width: i32, max_width: i32) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }

    pub fn offset_provider(mut self, provider: impl Fn() -> i32 + 'static) -> Self {
        self.offset_provider = Some(Rc::new(provider));
        self
    }

    /// Snapshot the origin offset for a new drag session. Absent provider
    /// means a zero offset.
    pub(crate) fn origin_offset(&self) -> i32 {
        self.offset_provider.as_ref().map(|get| get()).unwrap_or(0)
    }
}

impl fmt::Debug for ResizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizerConfig")
            .field("storage_key", &self.storage_key)
            .field("default_width", &self.default_width)
            .field("min_width", &self.min_width)
            .field("max_width", &self.max_width)
            .field("layout_variable", &self.layout_variable)
            .field("offset_provider", &self.offset_provider.is_some())
            .finish()
    }
}
