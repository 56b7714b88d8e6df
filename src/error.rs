//! Error types for the preference store and configuration.
//!
//! DESIGN
//! ======
//! None of these errors reach the host page. The controller converts every
//! `StoreError` into a fallback branch (light on read, ignore on write) and
//! logs it; `ConfigError` is only produced while parsing host-supplied JSON.

/// Failure talking to the persistent preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The host exposes no storage at all (disabled, sandboxed, private mode).
    #[error("preference storage is unavailable")]
    Unavailable,
    /// Reading `key` failed.
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// Writing `key` failed (quota exceeded, storage locked).
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

impl StoreError {
    #[must_use]
    pub fn read(key: &str, reason: impl Into<String>) -> Self {
        Self::Read { key: key.to_owned(), reason: reason.into() }
    }

    #[must_use]
    pub fn write(key: &str, reason: impl Into<String>) -> Self {
        Self::Write { key: key.to_owned(), reason: reason.into() }
    }
}

/// Error returned by [`crate::config::ThemeConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not a JSON object matching the config shape.
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required field was present but empty.
    #[error("invalid theme config: {0} must not be empty")]
    Invalid(&'static str),
}
