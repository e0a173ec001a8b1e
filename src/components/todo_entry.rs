//! Todo Entry Component
//!
//! A single row: completion checkbox, text, edit and delete buttons.

use leptos::prelude::*;

use crate::context::use_services;
use crate::store::{store_delete, store_edit, store_toggle_complete, use_todo_store};
use crate::view_model::TodoRow;

#[component]
pub fn TodoEntry(row: TodoRow) -> impl IntoView {
    let store = use_todo_store();
    let services = use_services();

    let text_class = if row.struck_through() { "todo-text completed" } else { "todo-text" };

    let toggle_id = row.id.clone();
    let toggle_services = services.clone();
    let edit_id = row.id.clone();
    let edit_services = services.clone();
    let delete_id = row.id;

    view! {
        <div class="todo-row">
            <div class="todo-main">
                // Checkbox
                <input
                    type="checkbox"
                    class="todo-check"
                    prop:checked=row.completed
                    on:change=move |_| store_toggle_complete(&store, &toggle_id, &toggle_services)
                />

                // Text
                <span class=text_class>{row.text}</span>
            </div>

            <div class="todo-actions">
                <button class="edit-btn" on:click=move |_| store_edit(&store, &edit_id, &edit_services)>
                    "Edit"
                </button>
                <button class="delete-btn" on:click=move |_| store_delete(&store, &delete_id, &services)>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
