//! Edit Row Component
//!
//! Inline rename with a local draft. Enter/[OK] or a press outside the row
//! commits; Escape/[CANCEL] leaves the title alone.

use leptos::html;
use leptos::prelude::*;
use leptos_pointer::bind_mousedown_outside;

use crate::list::Intent;
use crate::models::TaskId;
use crate::store::{dispatch, store_task, use_app_store};

/// Confirming intent, built from the draft as it is at call time
fn commit_intent(id: TaskId, draft: ReadSignal<String>) -> Intent {
    Intent::FinishEdit { id, title: Some(draft.get_untracked()) }
}

#[component]
pub fn EditRow(id: TaskId) -> impl IntoView {
    let store = use_app_store();
    let initial = store_task(&store, id).map(|t| t.title).unwrap_or_default();
    let (draft, set_draft) = signal(initial);
    let glyph = move || store_task(&store, id).map(|t| t.glyph());

    let row_ref = NodeRef::<html::Div>::new();
    let input_ref = NodeRef::<html::Input>::new();

    let commit = move || dispatch(&store, commit_intent(id, draft));
    let cancel = move || dispatch(&store, Intent::FinishEdit { id, title: None });

    bind_mousedown_outside(row_ref, commit);

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => commit(),
        "Escape" => cancel(),
        _ => {}
    };

    view! {
        <div class="task edit" node_ref=row_ref>
            <span class="glyph">{glyph}</span>
            <input
                type="text"
                node_ref=input_ref
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <span class="action" on:click=move |_| commit()>"[OK]"</span>
            <span class="action" on:click=move |_| cancel()>"[CANCEL]"</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::TaskList;

    #[test]
    fn test_commit_uses_latest_draft() {
        let owner = Owner::new();
        owner.with(|| {
            let mut list = TaskList::seeded([("Task 1", false), ("Task 2", false)]);
            let id = list.ids()[0];
            list.begin_edit(id).unwrap();

            let (draft, set_draft) = signal("Task 1".to_string());
            let commit = move || commit_intent(id, draft);
            set_draft.set("Renamed".to_string());

            let intent = commit();
            assert_eq!(intent, Intent::FinishEdit { id, title: Some("Renamed".to_string()) });
            list.apply(intent).unwrap();
            assert_eq!(list.get(id).unwrap().title, "Renamed");
            assert_eq!(list.editing(), None);
        });
        owner.cleanup();
    }
}
