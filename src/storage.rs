//! Persistence Layer
//!
//! Abstract key-value slot holding the whole todo list as one JSON document.
//! The browser implementation lives in `commands::storage`.

use crate::models::TodoItem;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read slot: {0}")]
    Read(String),
    #[error("failed to write slot: {0}")]
    Write(String),
    #[error("malformed todo document: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode todo document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Single-slot persistence for the todo list.
///
/// Implementors only move raw strings; `load` and `save` handle the
/// document format. Every save replaces the whole document.
pub trait TodoStorage: Send + Sync {
    /// Raw slot contents, `None` when nothing was stored yet
    fn read_slot(&self) -> StorageResult<Option<String>>;

    /// Replace the slot contents
    fn write_slot(&self, value: &str) -> StorageResult<()>;

    /// Decode the stored list; an absent slot is an empty list
    fn load(&self) -> StorageResult<Vec<TodoItem>> {
        match self.read_slot()? {
            Some(raw) => serde_json::from_str(&raw).map_err(StorageError::Decode),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, todos: &[TodoItem]) -> StorageResult<()> {
        let raw = serde_json::to_string(todos).map_err(StorageError::Encode)?;
        self.write_slot(&raw)
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::sync::Mutex;

    use super::{StorageError, StorageResult, TodoStorage};

    /// In-memory slot for tests
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        slot: Mutex<Option<String>>,
        fail_writes: bool,
        writes: Mutex<usize>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_raw(raw: &str) -> Self {
            Self {
                slot: Mutex::new(Some(raw.to_string())),
                ..Self::default()
            }
        }

        /// Storage whose writes always fail (quota exceeded, private mode, ...)
        pub fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        pub fn raw(&self) -> Option<String> {
            self.slot.lock().unwrap().clone()
        }

        pub fn write_count(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    impl TodoStorage for MemoryStorage {
        fn read_slot(&self) -> StorageResult<Option<String>> {
            Ok(self.slot.lock().unwrap().clone())
        }

        fn write_slot(&self, value: &str) -> StorageResult<()> {
            *self.writes.lock().unwrap() += 1;
            if self.fail_writes {
                return Err(StorageError::Write("quota exceeded".to_string()));
            }
            *self.slot.lock().unwrap() = Some(value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;

    fn item(id: &str, text: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::from(id),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_absent_slot_is_empty_list() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_slot_is_decode_error() {
        let storage = MemoryStorage::with_raw("{not json");
        assert!(matches!(storage.load(), Err(StorageError::Decode(_))));
    }

    #[test]
    fn test_null_slot_is_decode_error() {
        let storage = MemoryStorage::with_raw("null");
        assert!(matches!(storage.load(), Err(StorageError::Decode(_))));
    }

    #[test]
    fn test_reads_document_written_by_original_app() {
        let storage = MemoryStorage::with_raw(
            r#"[{"id":"9b2c","todo":"Buy milk","isCompleted":false},{"id":"77aa","todo":"Walk dog","isCompleted":true}]"#,
        );
        let todos = storage.load().unwrap();
        assert_eq!(
            todos,
            vec![item("9b2c", "Buy milk", false), item("77aa", "Walk dog", true)]
        );
    }

    #[test]
    fn test_save_replaces_whole_document() {
        let storage = MemoryStorage::new();
        storage.save(&[item("a", "first one", false), item("b", "second one", true)]).unwrap();
        storage.save(&[item("b", "second one", true)]).unwrap();

        assert_eq!(storage.load().unwrap(), vec![item("b", "second one", true)]);
        assert_eq!(
            storage.raw().unwrap(),
            r#"[{"id":"b","todo":"second one","isCompleted":true}]"#
        );
    }

    #[test]
    fn test_failing_write_surfaces_error() {
        let storage = MemoryStorage::failing();
        assert!(matches!(storage.save(&[]), Err(StorageError::Write(_))));
        assert_eq!(storage.raw(), None);
    }
}
