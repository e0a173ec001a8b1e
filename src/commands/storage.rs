//! Local Storage Binding
//!
//! `TodoStorage` over `window.localStorage`.

use super::js_error;
use crate::storage::{StorageError, StorageResult, TodoStorage};

/// One `localStorage` slot
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn local_storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl TodoStorage for BrowserStorage {
    fn read_slot(&self) -> StorageResult<Option<String>> {
        Self::local_storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(js_error(&e)))
    }

    fn write_slot(&self, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(&self.key, value)
            .map_err(|e| StorageError::Write(js_error(&e)))
    }
}
