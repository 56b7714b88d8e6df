//! Dark-mode preference controller.
//!
//! Reads the stored preference, reflects it onto the document as a marker
//! class plus a toggle icon, and flips both on every toggle activation.
//!
//! DESIGN
//! ======
//! The controller is generic over its store and document so the same logic
//! drives `localStorage` + DOM in the browser and the in-memory fakes in
//! tests. Session state (the control handle, the applied theme) lives in
//! `Cell`/`OnceCell`; the controller is shared with its click handler
//! through `Rc` and never crosses threads.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort while the visual update is not. A failed read
//! decodes as light; a failed write is logged and the page still switches
//! for the current session. Once the store has rejected a write, later
//! toggles flip the session theme instead of re-reading a stale entry.

use std::cell::{Cell, OnceCell};
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::document::{ThemeDocument, ToggleControl};
use crate::preference::Theme;
use crate::store::PreferenceStore;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Keeps the page's theme in step with the persisted preference.
pub struct ThemePreferenceController<S, D: ThemeDocument> {
    config: ThemeConfig,
    store: S,
    document: D,
    /// Filled once by [`Self::initialize`]; inner `None` means the page has no control.
    control: OnceCell<Option<D::Control>>,
    current: Cell<Theme>,
    degraded: Cell<bool>,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemePreferenceController<S, D> {
    #[must_use]
    pub fn new(config: ThemeConfig, store: S, document: D) -> Self {
        Self {
            config,
            store,
            document,
            control: OnceCell::new(),
            current: Cell::new(Theme::Light),
            degraded: Cell::new(false),
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Theme most recently applied to the document in this session.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        self.current.get()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.control.get().is_some()
    }

    // --- Operations ---

    /// Decode the stored preference. Read failures decode as light.
    #[must_use]
    pub fn read_preference(&self) -> Theme {
        let key = &self.config.storage_key;
        match self.store.get(key) {
            Ok(raw) => Theme::from_stored(raw.as_deref()),
            Err(err) => {
                tracing::warn!(%key, error = %err, "theme preference unreadable; using light");
                Theme::Light
            }
        }
    }

    /// Reflect the stored preference onto the document and the control.
    pub fn apply(&self) {
        self.render(self.read_preference());
    }

    /// Flip the preference, persist it best-effort, and update the page.
    pub fn on_toggle_activated(&self) {
        let base = if self.degraded.get() { self.current.get() } else { self.read_preference() };
        let next = base.toggled();
        let key = &self.config.storage_key;
        if let Err(err) = self.store.set(key, next.as_stored()) {
            tracing::warn!(%key, error = %err, "theme preference not persisted");
            self.degraded.set(true);
        }
        self.render(next);
    }

    /// Document-ready entry point: look up the control, apply the stored
    /// preference, and register the click handler. Runs at most once.
    pub fn initialize(self: &Rc<Self>)
    where
        S: 'static,
        D: 'static,
    {
        if self.is_initialized() {
            tracing::debug!("theme controller already initialized");
            return;
        }
        let found = self.document.find_control(&self.config.toggle_id);
        if self.control.set(found).is_err() {
            return;
        }

        self.apply();

        match self.control() {
            Some(control) => {
                let controller = Rc::clone(self);
                control.on_activate(Box::new(move || controller.on_toggle_activated()));
                tracing::info!(toggle_id = %self.config.toggle_id, theme = ?self.current_theme(), "theme toggle ready");
            }
            None => {
                tracing::info!(toggle_id = %self.config.toggle_id, theme = ?self.current_theme(), "no theme toggle on page");
            }
        }
    }

    fn control(&self) -> Option<&D::Control> {
        self.control.get().and_then(Option::as_ref)
    }

    fn render(&self, theme: Theme) {
        self.document.set_marker_class(&self.config.dark_class, theme.is_dark());
        if let Some(control) = self.control() {
            control.set_markup(self.config.icon_for(theme));
        }
        self.current.set(theme);
        tracing::debug!(?theme, "theme applied");
    }
}
