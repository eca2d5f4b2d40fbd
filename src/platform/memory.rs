//! In-memory platform implementation.
//!
//! Backs native tests and windowless hosts with the same services the web
//! platform binds to the document. Entries and layout variables are
//! inspectable so tests can assert on the synchronized side effects.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::platform::Platform;

/// In-memory [`Platform`]: a key-value string store plus recorded layout
/// variables and drag-visuals state.
#[derive(Debug, Default)]
pub struct MemoryPlatform {
    entries: RefCell<HashMap<String, String>>,
    layout_variables: RefCell<HashMap<String, String>>,
    drag_visuals_active: Cell<bool>,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a storage entry, as if persisted by a previous session.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    /// The last value persisted under `key`, if any.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// The last value published for the layout variable `name`, if any.
    pub fn layout_variable(&self, name: &str) -> Option<String> {
        self.layout_variables.borrow().get(name).cloned()
    }

    /// Whether drag visuals are currently applied.
    pub fn drag_visuals_active(&self) -> bool {
        self.drag_visuals_active.get()
    }
}

impl Platform for MemoryPlatform {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn set_layout_variable(&self, name: &str, value: &str) {
        self.layout_variables
            .borrow_mut()
            .insert(name.to_owned(), value.to_owned());
    }

    fn begin_drag_visuals(&self) {
        self.drag_visuals_active.set(true);
    }

    fn end_drag_visuals(&self) {
        self.drag_visuals_active.set(false);
    }
}
