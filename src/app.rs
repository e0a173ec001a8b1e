//! Todo App
//!
//! Root component: loads the list once, provides context, lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FinishedFilter, NewTodoForm, TodoListView};
use crate::config::AppConfig;
use crate::context::TodoServices;
use crate::store::TodoState;
use crate::view_model::TodoView;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let services = TodoServices::browser(config);

    // Loaded exactly once, before the first render
    let store = Store::new(TodoState::load(&services));

    // Provide context to all children
    provide_context(services);
    provide_context(store);

    let model = Memo::new(move |_| store.with(TodoView::project));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Todo's Application"</h1>

                <NewTodoForm model=model />

                <FinishedFilter model=model />

                <TodoListView model=model />
            </main>
        </div>
    }
}
