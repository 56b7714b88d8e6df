//! Browser bindings: `localStorage`, `<body>` and the `#themeToggle` button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. The host page loads the WASM
//! module and calls [`init_theme_toggle`] (or [`init_theme_toggle_with`]);
//! everything past that point is the generic controller. Nothing in here
//! throws into the page: DOM and storage failures are logged and dropped.

use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Storage};

use crate::config::ThemeConfig;
use crate::controller::ThemePreferenceController;
use crate::document::{ThemeDocument, ToggleControl};
use crate::error::StoreError;
use crate::store::PreferenceStore;

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// =============================================================
// Store
// =============================================================

/// The origin's `window.localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            // Access can throw (sandboxed frames, blocked cookies) or be null.
            Ok(None) | Err(_) => Err(StoreError::Unavailable),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|err| StoreError::read(key, describe(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(|err| StoreError::write(key, describe(&err)))
    }
}

// =============================================================
// Document
// =============================================================

/// The live DOM document; the marker class goes on `<body>`.
#[derive(Clone, Debug)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ThemeDocument for BrowserDocument {
    type Control = BrowserControl;

    fn set_marker_class(&self, class: &str, enabled: bool) {
        let Some(body) = self.document.body() else {
            tracing::warn!(%class, "document has no body; theme class not applied");
            return;
        };
        if let Err(err) = body.class_list().toggle_with_force(class, enabled) {
            tracing::warn!(%class, error = %describe(&err), "failed to update theme class");
        }
    }

    fn find_control(&self, id: &str) -> Option<BrowserControl> {
        self.document.get_element_by_id(id).map(|element| BrowserControl { element })
    }
}

/// A toggle element found by id.
#[derive(Clone, Debug)]
pub struct BrowserControl {
    element: Element,
}

impl ToggleControl for BrowserControl {
    fn set_markup(&self, markup: &str) {
        self.element.set_inner_html(markup);
    }

    fn on_activate(&self, handler: Box<dyn Fn()>) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        if let Err(err) = self
            .element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %describe(&err), "failed to register theme toggle click handler");
            return;
        }
        // The listener lives as long as the page.
        closure.forget();
    }
}

// =============================================================
// Entry points
// =============================================================

/// Start the theme toggle with the stock key, id, class and icons.
#[wasm_bindgen]
pub fn init_theme_toggle() {
    start(ThemeConfig::default());
}

/// Start the theme toggle with a JSON config object. Unknown or invalid
/// config falls back to the defaults rather than breaking the page.
#[wasm_bindgen]
pub fn init_theme_toggle_with(config_json: &str) {
    let config = match ThemeConfig::from_json(config_json) {
        Ok(config) => config,
        Err(err) => {
            install_logging();
            tracing::warn!(error = %err, "invalid theme config; using defaults");
            ThemeConfig::default()
        }
    };
    start(config);
}

fn install_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        tracing::debug!(error = %err, "console logger already installed");
    }
}

fn start(config: ThemeConfig) {
    install_logging();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::warn!("no document; theme toggle disabled");
        return;
    };
    let controller = Rc::new(ThemePreferenceController::new(
        config,
        LocalStorage,
        BrowserDocument::new(document.clone()),
    ));

    if document.ready_state() != "loading" {
        controller.initialize();
        return;
    }

    let on_ready = Closure::once_into_js(move || controller.initialize());
    let callback: &js_sys::Function = on_ready.unchecked_ref();
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", callback) {
        tracing::warn!(error = %describe(&err), "failed to wait for DOMContentLoaded");
    }
}
