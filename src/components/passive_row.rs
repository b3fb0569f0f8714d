//! Passive Row Component
//!
//! Read-only row shown while another row is being edited.

use leptos::prelude::*;

use crate::models::TaskId;
use crate::store::{store_task, use_app_store};

#[component]
pub fn PassiveRow(id: TaskId) -> impl IntoView {
    let store = use_app_store();
    let task = move || store_task(&store, id);

    view! {
        <div class="task passive">
            <span class="glyph">{move || task().map(|t| t.glyph())}</span>
            <span class="title">{move || task().map(|t| t.title)}</span>
        </div>
    }
}
