//! Frontend Models
//!
//! Data structures persisted to the browser's local storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Minimum trimmed length (exclusive) a todo text must exceed
pub const MIN_TODO_LEN: usize = 3;

/// Whether `text` is long enough to become a todo
pub fn is_valid_todo_text(text: &str) -> bool {
    text.trim().chars().count() > MIN_TODO_LEN
}

/// Opaque todo identifier.
///
/// New ids are random v4 UUIDs; ids read back from storage are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Todo data structure (field names match the stored document)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    #[serde(rename = "todo", alias = "text")]
    pub text: String,
    #[serde(rename = "isCompleted", alias = "completed", default)]
    pub completed: bool,
}

impl TodoItem {
    /// Create an open todo with a fresh id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TodoId::generate(),
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("hi", false)]
    #[case("abc", false)]
    #[case("   abc   ", false)]
    #[case("abcd", true)]
    #[case("  Buy milk  ", true)]
    #[case("日本語だ", true)]
    #[case("日本語", false)]
    fn test_text_validation(#[case] text: &str, #[case] valid: bool) {
        assert_eq!(is_valid_todo_text(text), valid);
    }

    #[test]
    fn test_new_item_is_open() {
        let item = TodoItem::new("Buy milk");
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
        assert!(!item.id.as_str().is_empty());
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(TodoId::generate(), TodoId::generate());
    }

    #[test]
    fn test_stored_field_names() {
        let item = TodoItem {
            id: TodoId::from("a1"),
            text: "Buy milk".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "a1", "todo": "Buy milk", "isCompleted": true })
        );
    }

    #[test]
    fn test_reads_alias_field_names() {
        let item: TodoItem =
            serde_json::from_str(r#"{"id":"a1","text":"Walk dog","completed":true}"#).unwrap();
        assert_eq!(item.text, "Walk dog");
        assert!(item.completed);
    }

    #[test]
    fn test_missing_completed_defaults_to_open() {
        let item: TodoItem = serde_json::from_str(r#"{"id":"a1","todo":"Walk dog"}"#).unwrap();
        assert!(!item.completed);
    }
}
