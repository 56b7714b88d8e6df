//! In-memory store and document for tests and non-browser hosts.
//!
//! SYSTEM CONTEXT
//! ==============
//! These types mirror the browser objects closely enough to exercise the
//! controller without WASM: clones share state the way every script on an
//! origin shares one `localStorage`, so dropping a controller and building a
//! new one over a cloned [`MemoryStore`] models a page reload.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::document::{ThemeDocument, ToggleControl};
use crate::error::StoreError;
use crate::store::PreferenceStore;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

// =============================================================
// Stores
// =============================================================

/// Shared string map standing in for `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Current raw value for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Remove `key`, as a user clearing site data would.
    pub fn clear(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store that rejects reads and/or writes while delegating the rest.
#[derive(Clone, Debug)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_reads: bool,
    fail_writes: bool,
}

impl FailingStore {
    /// Storage disabled by the host: every call fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { inner: MemoryStore::new(), fail_reads: true, fail_writes: true }
    }

    /// Readable storage that rejects writes (quota exhausted).
    #[must_use]
    pub fn read_only(inner: MemoryStore) -> Self {
        Self { inner, fail_reads: false, fail_writes: true }
    }
}

impl PreferenceStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable);
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(if self.fail_reads {
                StoreError::Unavailable
            } else {
                StoreError::write(key, "quota exceeded")
            });
        }
        self.inner.set(key, value)
    }
}

// =============================================================
// Document
// =============================================================

/// Page with a class list on its content root and optional controls by id.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    classes: Rc<RefCell<BTreeSet<String>>>,
    controls: Rc<RefCell<HashMap<String, MemoryControl>>>,
    lookups: Rc<Cell<usize>>,
}

impl MemoryDocument {
    /// Page variant without a toggle control.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Page carrying a control under `id`. Returns the page and a handle to it.
    #[must_use]
    pub fn with_control(id: &str) -> (Self, MemoryControl) {
        let doc = Self::new();
        let control = MemoryControl::default();
        doc.controls.borrow_mut().insert(id.to_owned(), control.clone());
        (doc, control)
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    /// Number of `find_control` calls so far.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl ThemeDocument for MemoryDocument {
    type Control = MemoryControl;

    fn set_marker_class(&self, class: &str, enabled: bool) {
        let mut classes = self.classes.borrow_mut();
        if enabled {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn find_control(&self, id: &str) -> Option<MemoryControl> {
        self.lookups.set(self.lookups.get() + 1);
        self.controls.borrow().get(id).cloned()
    }
}

/// Toggle control that records its markup and dispatches synthetic clicks.
#[derive(Clone, Default)]
pub struct MemoryControl {
    markup: Rc<RefCell<String>>,
    handlers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl MemoryControl {
    #[must_use]
    pub fn markup(&self) -> String {
        self.markup.borrow().clone()
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Run every registered handler once, in registration order.
    pub fn click(&self) {
        // Snapshot so handlers may touch this control while running.
        let handlers: Vec<Rc<dyn Fn()>> = self.handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }
}

impl ToggleControl for MemoryControl {
    fn set_markup(&self, markup: &str) {
        markup.clone_into(&mut self.markup.borrow_mut());
    }

    fn on_activate(&self, handler: Box<dyn Fn()>) {
        self.handlers.borrow_mut().push(Rc::from(handler));
    }
}
