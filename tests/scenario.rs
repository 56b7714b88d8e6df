//! End-to-end page scenarios driven through the public API with the
//! in-memory host.

use std::rc::Rc;

use theme_toggle::consts::{MOON_ICON, SUN_ICON};
use theme_toggle::memory::{FailingStore, MemoryControl, MemoryDocument, MemoryStore};
use theme_toggle::{Theme, ThemeConfig, ThemePreferenceController};

const KEY: &str = "theme:dark";

type Page = Rc<ThemePreferenceController<MemoryStore, MemoryDocument>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::DEBUG).try_init();
}

/// Simulate a page load over the origin's shared store.
fn load_page(store: &MemoryStore) -> (Page, MemoryControl) {
    let (doc, control) = MemoryDocument::with_control("themeToggle");
    let page = Rc::new(ThemePreferenceController::new(ThemeConfig::default(), store.clone(), doc));
    page.initialize();
    (page, control)
}

#[test]
fn empty_store_load_click_click() {
    init_tracing();
    let store = MemoryStore::new();
    let (page, control) = load_page(&store);

    assert!(!page.document().has_class("dark"));
    assert_eq!(control.markup(), MOON_ICON);

    control.click();
    assert_eq!(store.raw(KEY).as_deref(), Some("1"));
    assert!(page.document().has_class("dark"));
    assert_eq!(control.markup(), SUN_ICON);

    control.click();
    assert_eq!(store.raw(KEY).as_deref(), Some("0"));
    assert!(!page.document().has_class("dark"));
    assert_eq!(control.markup(), MOON_ICON);
}

#[test]
fn preference_survives_reload() {
    init_tracing();
    let store = MemoryStore::new();
    {
        let (_page, control) = load_page(&store);
        control.click();
    }

    let (page, control) = load_page(&store);
    assert_eq!(page.current_theme(), Theme::Dark);
    assert!(page.document().has_class("dark"));
    assert_eq!(control.markup(), SUN_ICON);
}

#[test]
fn cleared_storage_reloads_light() {
    init_tracing();
    let store = MemoryStore::with_entry(KEY, "1");
    store.clear(KEY);
    let (page, control) = load_page(&store);
    assert_eq!(page.current_theme(), Theme::Light);
    assert_eq!(control.markup(), MOON_ICON);
}

#[test]
fn page_without_control_applies_class_only() {
    init_tracing();
    let store = MemoryStore::with_entry(KEY, "1");
    let page = Rc::new(ThemePreferenceController::new(ThemeConfig::default(), store, MemoryDocument::new()));
    page.initialize();
    assert!(page.document().has_class("dark"));
    assert!(page.is_initialized());
}

#[test]
fn two_clicks_restore_any_start_state() {
    init_tracing();
    for start in [None, Some("0"), Some("1")] {
        let store = match start {
            Some(raw) => MemoryStore::with_entry(KEY, raw),
            None => MemoryStore::new(),
        };
        let (page, control) = load_page(&store);
        let before_theme = page.current_theme();
        let before_markup = control.markup();

        control.click();
        control.click();

        assert_eq!(page.current_theme(), before_theme);
        assert_eq!(control.markup(), before_markup);
        assert_eq!(Theme::from_stored(store.raw(KEY).as_deref()), before_theme);
    }
}

#[test]
fn disabled_storage_never_breaks_the_page() {
    init_tracing();
    let (doc, control) = MemoryDocument::with_control("themeToggle");
    let page = Rc::new(ThemePreferenceController::new(ThemeConfig::default(), FailingStore::unavailable(), doc));
    page.initialize();
    assert_eq!(control.markup(), MOON_ICON);

    control.click();
    assert!(page.document().has_class("dark"));
    control.click();
    assert!(!page.document().has_class("dark"));
}

#[test]
fn config_from_json_drives_a_page() {
    init_tracing();
    let config = ThemeConfig::from_json(r#"{"toggle_id":"modeBtn","dark_class":"theme-dark"}"#).unwrap();
    let store = MemoryStore::new();
    let (doc, control) = MemoryDocument::with_control("modeBtn");
    let page = Rc::new(ThemePreferenceController::new(config, store.clone(), doc));
    page.initialize();

    control.click();
    assert_eq!(store.raw(KEY).as_deref(), Some("1"));
    assert!(page.document().has_class("theme-dark"));
    assert_eq!(control.markup(), SUN_ICON);
}
