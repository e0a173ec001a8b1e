//! Todo List View Component
//!
//! Placeholder for an empty list, otherwise the visible rows.

use leptos::prelude::*;

use crate::components::TodoEntry;
use crate::view_model::{ListBody, TodoView};

#[component]
pub fn TodoListView(model: Memo<TodoView>) -> impl IntoView {
    let is_empty = move || model.with(|v| v.body == ListBody::Empty);

    view! {
        <div class="todo-list">
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="empty-state">"No Todos available"</p> }
            >
                <For
                    each=move || model.with(|v| v.rows().to_vec())
                    // Key on every field so a toggled row is redrawn
                    key=|row| row.clone()
                    children=move |row| view! { <TodoEntry row=row /> }
                />
            </Show>
        </div>
    }
}
