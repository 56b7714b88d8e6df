//! Persisted dark-mode toggle for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and loaded by the host page. It reads
//! a single boolean preference from `localStorage` (`"theme:dark"` = `"1"` or
//! `"0"`), reflects it as a `dark` class on `<body>`, and swaps the sun/moon
//! icon inside the optional `#themeToggle` button. Each click flips the
//! stored value and re-applies it.
//!
//! The browser is reached only through two seams, [`store::PreferenceStore`]
//! and [`document::ThemeDocument`], so [`controller::ThemePreferenceController`]
//! runs unchanged against the in-memory host in [`memory`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Apply / toggle / initialize logic |
//! | [`preference`] | Two-state [`preference::Theme`] and its stored encoding |
//! | [`config`] | Storage key, element id, marker class and icon markup |
//! | [`store`] | Persistent key-value seam |
//! | [`document`] | Content root and toggle control seam |
//! | [`memory`] | In-memory store and document for tests and non-browser hosts |
//! | [`error`] | Store and config errors |
//! | [`consts`] | Stock key, id, class and icon constants |
//! | `web` | `localStorage` / DOM adapters and WASM entry points (`hydrate`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod document;
pub mod error;
pub mod memory;
pub mod preference;
pub mod store;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::ThemePreferenceController;
pub use preference::Theme;
