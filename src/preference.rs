//! The two-state dark/light preference and its stored encoding.
//!
//! The persisted form is a single string: exactly `"1"` means dark. Every
//! other value, including a missing entry, decodes as light. Decoding never
//! fails, so a corrupted entry can not break page load.

use crate::consts::{STORED_DARK, STORED_LIGHT};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Decode a stored entry. Only the literal `"1"` is dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(STORED_DARK) => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Literal written back to the store.
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Dark => STORED_DARK,
            Self::Light => STORED_LIGHT,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl From<bool> for Theme {
    fn from(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}
