//! New Todo Form Component
//!
//! Text input bound to the draft plus the "Add" button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_services;
use crate::store::{store_set_draft, store_submit_draft, use_todo_store};
use crate::view_model::TodoView;

/// Form for adding todos; also reused by "Edit" which refills the draft
#[component]
pub fn NewTodoForm(model: Memo<TodoView>) -> impl IntoView {
    let store = use_todo_store();
    let services = use_services();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_draft(&store, &services);
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                class="new-todo-input"
                placeholder="Enter a new todo (min 4 characters)"
                prop:value=move || model.with(|v| v.draft.clone())
                on:input=move |ev| {
                    let input = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
                    if let Some(input) = input {
                        store_set_draft(&store, input.value());
                    }
                }
            />
            <button
                type="submit"
                class="add-btn"
                disabled=move || !model.with(|v| v.add_enabled)
            >
                "Add"
            </button>
        </form>
    }
}
