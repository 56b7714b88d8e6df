//! Host-tunable settings for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page script this crate replaces hard-coded its storage key and element
//! id. They live here instead so tests and embedding pages can pick their own
//! values; every field falls back to the stock page's constants.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DARK_CLASS, DEFAULT_STORAGE_KEY, DEFAULT_TOGGLE_ID, MOON_ICON, SUN_ICON};
use crate::error::ConfigError;
use crate::preference::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Settings shared by the controller and its host adapters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key of the preference entry in the persistent store.
    pub storage_key: String,
    /// Element id of the optional toggle control.
    pub toggle_id: String,
    /// Marker class applied to the content root while dark.
    pub dark_class: String,
    /// Control markup while dark.
    pub sun_icon: String,
    /// Control markup while light.
    pub moon_icon: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            sun_icon: SUN_ICON.to_owned(),
            moon_icon: MOON_ICON.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON object. Missing fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when the key, id or class is empty.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the controller silently inert.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key"));
        }
        if self.toggle_id.trim().is_empty() {
            return Err(ConfigError::Invalid("toggle_id"));
        }
        if self.dark_class.trim().is_empty() {
            return Err(ConfigError::Invalid("dark_class"));
        }
        Ok(())
    }

    /// Control markup for `theme`: sun while dark, moon while light.
    #[must_use]
    pub fn icon_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.sun_icon,
            Theme::Light => &self.moon_icon,
        }
    }
}
