//! Global Application State Store
//!
//! `TodoState` owns the todo list, the "show finished" flag and the input
//! draft. Mutations are plain methods so they run without a DOM; the
//! `store_*` helpers apply them to the reactive store.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, error, info, warn};

use crate::context::TodoServices;
use crate::models::{is_valid_todo_text, TodoId, TodoItem};

/// Todo list state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    /// All todos, in insertion order
    pub todos: Vec<TodoItem>,
    /// When false only completed todos are shown (session only)
    pub show_finished: bool,
    /// Text input buffer
    pub draft: String,
}

impl TodoState {
    /// Read the persisted list once at startup.
    ///
    /// A missing or malformed document yields an empty list.
    pub fn load(services: &TodoServices) -> Self {
        let todos = match services.storage.load() {
            Ok(todos) => {
                info!(count = todos.len(), "loaded todos");
                todos
            }
            Err(e) => {
                warn!(error = %e, "discarding stored todos");
                Vec::new()
            }
        };
        Self {
            todos,
            show_finished: services.config.show_finished_default,
            draft: String::new(),
        }
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.todos.iter().any(|todo| &todo.id == id)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Append a new open todo and clear the draft.
    ///
    /// Returns `None` without touching state when the trimmed text is too short.
    pub fn add(&mut self, text: &str, services: &TodoServices) -> Option<TodoId> {
        if !is_valid_todo_text(text) {
            debug!("rejected todo text that is too short");
            return None;
        }
        let item = TodoItem::new(text);
        let id = item.id.clone();

        let mut next = self.todos.clone();
        next.push(item);
        self.commit(next, services);
        self.draft.clear();

        info!(%id, "added todo");
        Some(id)
    }

    /// Add whatever is in the draft
    pub fn submit_draft(&mut self, services: &TodoServices) -> Option<TodoId> {
        let text = self.draft.clone();
        self.add(&text, services)
    }

    /// Move a todo's text back into the draft and delete the todo.
    ///
    /// The new text is only committed by a later `add`. If the delete is
    /// declined the draft keeps the text and the todo stays.
    /// Returns whether the todo existed.
    pub fn edit(&mut self, id: &TodoId, services: &TodoServices) -> bool {
        let Some(text) = self.todos.iter().find(|todo| &todo.id == id).map(|todo| todo.text.clone()) else {
            debug!(%id, "edit of unknown todo ignored");
            return false;
        };
        self.draft = text;
        self.delete(id, services);
        true
    }

    /// Remove a todo after the user confirms.
    ///
    /// Unknown ids are ignored without prompting. Returns whether it was removed.
    pub fn delete(&mut self, id: &TodoId, services: &TodoServices) -> bool {
        if !self.contains(id) {
            debug!(%id, "delete of unknown todo ignored");
            return false;
        }
        if !services.confirm.confirm(&services.config.confirm_delete_message) {
            debug!(%id, "delete declined");
            return false;
        }

        let next = self.todos.iter().filter(|todo| &todo.id != id).cloned().collect();
        self.commit(next, services);

        info!(%id, "deleted todo");
        true
    }

    /// Flip `completed` on the matching todo. Returns whether one matched.
    pub fn toggle_complete(&mut self, id: &TodoId, services: &TodoServices) -> bool {
        if !self.contains(id) {
            debug!(%id, "toggle of unknown todo ignored");
            return false;
        }

        let next = self
            .todos
            .iter()
            .map(|todo| {
                if &todo.id == id {
                    TodoItem { completed: !todo.completed, ..todo.clone() }
                } else {
                    todo.clone()
                }
            })
            .collect();
        self.commit(next, services);

        debug!(%id, "toggled todo");
        true
    }

    /// Flip the display filter. Not persisted.
    pub fn toggle_filter(&mut self) {
        self.show_finished = !self.show_finished;
    }

    /// Replace the list and write it out in full.
    ///
    /// A failed write is logged; the in-memory list stays updated.
    fn commit(&mut self, next: Vec<TodoItem>, services: &TodoServices) {
        self.todos = next;
        if let Err(e) = services.storage.save(&self.todos) {
            error!(error = %e, count = self.todos.len(), "failed to persist todos");
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_draft(store: &TodoStore, text: String) {
    store.update(|state| state.set_draft(text));
}

pub fn store_submit_draft(store: &TodoStore, services: &TodoServices) {
    store.maybe_update(|state| state.submit_draft(services).is_some());
}

pub fn store_edit(store: &TodoStore, id: &TodoId, services: &TodoServices) {
    store.maybe_update(|state| state.edit(id, services));
}

pub fn store_delete(store: &TodoStore, id: &TodoId, services: &TodoServices) {
    store.maybe_update(|state| state.delete(id, services));
}

pub fn store_toggle_complete(store: &TodoStore, id: &TodoId, services: &TodoServices) {
    store.maybe_update(|state| state.toggle_complete(id, services));
}

pub fn store_toggle_filter(store: &TodoStore) {
    store.show_finished().update(|show| *show = !*show);
}
