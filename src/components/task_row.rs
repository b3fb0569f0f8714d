//! Task Row Component
//!
//! Wrapper that tracks hover and renders the row for its current mode.

use leptos::prelude::*;
use leptos_pointer::{create_hover_signals, make_on_mouseenter, make_on_mouseleave};

use crate::components::{ActiveRow, EditRow, PassiveRow};
use crate::config::AffordanceVisibility;
use crate::models::{RowMode, TaskId};
use crate::store::{store_mode, use_app_store, AppStateStoreFields};

/// A single row in the list
#[component]
pub fn TaskRow(id: TaskId) -> impl IntoView {
    let store = use_app_store();
    let hover = create_hover_signals();

    // Memo so the inner row is only rebuilt when the mode changes
    let mode = Memo::new(move |_| store_mode(&store, id));

    let show_actions = Signal::derive(move || match store.affordances().get() {
        AffordanceVisibility::Always => true,
        AffordanceVisibility::OnHover => hover.hovering_read.get(),
    });

    view! {
        <div
            class="task-row"
            on:mouseenter=make_on_mouseenter(hover)
            on:mouseleave=make_on_mouseleave(hover)
        >
            {move || match mode.get() {
                RowMode::Active => view! { <ActiveRow id=id show_actions=show_actions /> }.into_any(),
                RowMode::Passive => view! { <PassiveRow id=id /> }.into_any(),
                RowMode::Edit => view! { <EditRow id=id /> }.into_any(),
            }}
        </div>
    }
}
