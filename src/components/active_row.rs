//! Active Row Component
//!
//! Default interactive row: toggle done, and the [DEL]/[EDIT] affordances.

use leptos::prelude::*;

use crate::list::Intent;
use crate::models::TaskId;
use crate::store::{dispatch, store_task, use_app_store};

/// Interactive row
///
/// # Arguments
/// * `id` - Task shown by this row
/// * `show_actions` - Whether [DEL] and [EDIT] are currently visible
#[component]
pub fn ActiveRow(
    id: TaskId,
    #[prop(into)] show_actions: Signal<bool>,
) -> impl IntoView {
    let store = use_app_store();
    let task = move || store_task(&store, id);

    let toggle_done = move |_| {
        if let Some(task) = store_task(&store, id) {
            dispatch(&store, Intent::SetDone { id, done: !task.done });
        }
    };

    view! {
        <div class="task active">
            <span class="glyph clickable" on:click=toggle_done>
                {move || task().map(|t| t.glyph())}
            </span>
            <span class="title">{move || task().map(|t| t.title)}</span>
            <Show when=move || show_actions.get()>
                <span class="action" on:click=move |_| dispatch(&store, Intent::Delete(id))>
                    "[DEL]"
                </span>
                <span class="action" on:click=move |_| dispatch(&store, Intent::BeginEdit(id))>
                    "[EDIT]"
                </span>
            </Show>
        </div>
    }
}
