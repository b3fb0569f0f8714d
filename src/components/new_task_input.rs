//! New Task Input Component
//!
//! Text input that adds a task on Enter. Disabled while a row is being edited.

use leptos::prelude::*;

use crate::list::Intent;
use crate::store::{dispatch, store_input_enabled, use_app_store};

/// Turn the draft into an `Add` intent and reset it to empty.
/// Empty titles are dropped by the controller; the draft resets either way.
fn take_draft(draft: RwSignal<String>) -> Intent {
    let title = draft.get_untracked();
    draft.set(String::new());
    Intent::Add(title)
}

#[component]
pub fn NewTaskInput() -> impl IntoView {
    let store = use_app_store();
    let draft = RwSignal::new(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            dispatch(&store, take_draft(draft));
        }
    };

    view! {
        <div class="new-task">
            <input
                type="text"
                placeholder="New task..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=on_keydown
                disabled=move || !store_input_enabled(&store)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{IntentError, TaskList};

    #[test]
    fn test_empty_add_is_ignored_and_draft_stays_empty() {
        let owner = Owner::new();
        owner.with(|| {
            let mut list = TaskList::seeded([("Task 1", false)]);
            let before = list.clone();
            let draft = RwSignal::new(String::new());

            assert_eq!(list.apply(take_draft(draft)), Err(IntentError::EmptyTitle));
            assert_eq!(list, before);
            assert_eq!(draft.get_untracked(), "");
        });
        owner.cleanup();
    }

    #[test]
    fn test_add_resets_draft() {
        let owner = Owner::new();
        owner.with(|| {
            let mut list = TaskList::seeded([("Task 1", false)]);
            let draft = RwSignal::new("Milk".to_string());

            let intent = take_draft(draft);
            assert_eq!(intent, Intent::Add("Milk".to_string()));
            assert_eq!(draft.get_untracked(), "");

            list.apply(intent).unwrap();
            assert_eq!(list.len(), 2);
            assert_eq!(list.tasks()[1].title, "Milk");
        });
        owner.cleanup();
    }
}
