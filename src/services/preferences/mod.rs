//! Key-value preference stores.
//!
//! The picker reads exactly one value from here: the UI language code stored
//! under a host-chosen key. Stores are passed in explicitly, never reached
//! through a global.

mod json;
mod sqlite;

pub use json::JsonPreferenceStore;
pub use sqlite::SqlitePreferenceStore;

use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// A string key-value store, in the spirit of browser local storage.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read a value. `Ok(None)` means the key is not set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process store, used by tests and the demo app.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.into(), value.into());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
