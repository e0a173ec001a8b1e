//! UI Components
//!
//! Leptos components drawing the todo page.

mod new_todo_form;
mod finished_filter;
mod todo_list_view;
mod todo_entry;

pub use new_todo_form::NewTodoForm;
pub use finished_filter::FinishedFilter;
pub use todo_list_view::TodoListView;
pub use todo_entry::TodoEntry;
