//! Finished Filter Component

use leptos::prelude::*;

use crate::store::{store_toggle_filter, use_todo_store};
use crate::view_model::TodoView;

/// "Show Finished" checkbox.
///
/// Checked means the flag is off, i.e. only completed todos are listed.
#[component]
pub fn FinishedFilter(model: Memo<TodoView>) -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="finished-filter">
            <input
                type="checkbox"
                id="toggleShowFinished"
                prop:checked=move || model.with(|v| v.filter_checked)
                on:change=move |_| store_toggle_filter(&store)
            />
            <label for="toggleShowFinished">"Show Finished"</label>
        </div>
    }
}
