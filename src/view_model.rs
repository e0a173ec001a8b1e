//! View Model
//!
//! Pure projection of `TodoState` into what the components draw.

use crate::models::{is_valid_todo_text, TodoId, TodoItem};
use crate::store::TodoState;

/// Whether the "Add" button is enabled for this draft
pub fn can_add(draft: &str) -> bool {
    is_valid_todo_text(draft)
}

/// Row visibility under the "show finished" flag.
///
/// With the flag off only completed todos remain visible.
pub fn is_visible(todo: &TodoItem, show_finished: bool) -> bool {
    show_finished || todo.completed
}

/// Visible todos in list order
pub fn visible_todos(todos: &[TodoItem], show_finished: bool) -> Vec<TodoItem> {
    todos.iter().filter(|todo| is_visible(todo, show_finished)).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoRow {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl TodoRow {
    /// Completed todos are drawn struck through
    pub fn struck_through(&self) -> bool {
        self.completed
    }
}

impl From<&TodoItem> for TodoRow {
    fn from(todo: &TodoItem) -> Self {
        Self {
            id: todo.id.clone(),
            text: todo.text.clone(),
            completed: todo.completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    /// The list itself is empty (before filtering)
    Empty,
    Rows(Vec<TodoRow>),
}

/// Everything the page shows for one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub draft: String,
    pub add_enabled: bool,
    /// The filter checkbox is checked when finished todos are hidden
    pub filter_checked: bool,
    pub body: ListBody,
}

impl TodoView {
    pub fn project(state: &TodoState) -> Self {
        let body = if state.todos.is_empty() {
            ListBody::Empty
        } else {
            ListBody::Rows(
                visible_todos(&state.todos, state.show_finished)
                    .iter()
                    .map(TodoRow::from)
                    .collect(),
            )
        };
        Self {
            draft: state.draft.clone(),
            add_enabled: can_add(&state.draft),
            filter_checked: !state.show_finished,
            body,
        }
    }

    pub fn rows(&self) -> &[TodoRow] {
        match &self.body {
            ListBody::Empty => &[],
            ListBody::Rows(rows) => rows,
        }
    }
}
