//! Persistent key-value store seam.
//!
//! The browser implementation is `localStorage` (see `web`); tests and
//! non-browser hosts use [`crate::memory::MemoryStore`]. Both are synchronous
//! and origin scoped, so the controller read-modify-writes without locking.

use crate::error::StoreError;

/// String key-value storage holding the preference entry.
pub trait PreferenceStore {
    /// Read the raw value for `key`. `Ok(None)` when the entry is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage can not be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the write is rejected.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
