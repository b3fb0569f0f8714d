//! Task List View Component
//!
//! Keyed list of rows followed by the new-task input.
//! Shows a placeholder line when the list is empty.

use leptos::prelude::*;

use crate::components::{NewTaskInput, TaskRow};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();
    let ids = move || store.list().with(|list| list.ids());

    view! {
        <div class="task-list">
            <For
                each=ids
                key=|id| *id
                children=move |id| view! { <TaskRow id=id /> }
            />
            <Show when=move || store.list().with(|list| list.is_empty())>
                <p class="task-empty">"Nothing to do"</p>
            </Show>
            <NewTaskInput />
            <p class="task-count">
                {move || store.list().with(|list| format!("{} of {} remaining", list.remaining(), list.len()))}
            </p>
        </div>
    }
}
