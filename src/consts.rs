//! Shared string constants for the theme toggle.

// ── Storage ─────────────────────────────────────────────────────

/// Local storage key holding the dark-mode preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme:dark";

/// Stored literal for "dark enabled". Anything else decodes as light.
pub const STORED_DARK: &str = "1";

/// Stored literal for "dark disabled".
pub const STORED_LIGHT: &str = "0";

// ── Document ────────────────────────────────────────────────────

/// Element id of the optional toggle button.
pub const DEFAULT_TOGGLE_ID: &str = "themeToggle";

/// Class placed on `<body>` while dark mode is active.
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Toggle markup shown while dark mode is active (click to go light).
pub const SUN_ICON: &str = r#"<i class="fa-solid fa-sun"></i>"#;

/// Toggle markup shown while light mode is active (click to go dark).
pub const MOON_ICON: &str = r#"<i class="fa-solid fa-moon"></i>"#;
