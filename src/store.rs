//! Application State Store
//!
//! Uses Leptos reactive_stores so rows only re-render for the fields they read.
//! The list controller in `dispatch` is the only writer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AffordanceVisibility;
use crate::list::{Intent, TaskList};
use crate::models::{RowMode, Task, TaskId};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks and the current edit target
    pub list: TaskList,
    /// Visibility of the active-row affordances
    pub affordances: AffordanceVisibility,
}

impl AppState {
    pub fn new(list: TaskList, affordances: AffordanceVisibility) -> Self {
        Self { list, affordances }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply an intent to a copy of the list and replace the stored list with it.
/// Rejected intents are logged and leave the store untouched.
pub fn dispatch(store: &AppStore, intent: Intent) {
    let mut next = store.list().get_untracked();
    let label = format!("{:?}", intent);
    match next.apply(intent) {
        Ok(()) => {
            web_sys::console::log_1(&format!("[STORE] {}", label).into());
            store.list().set(next);
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("[STORE] ignored {}: {}", label, err).into());
        }
    }
}

// ========================
// Store Read Helpers
// ========================

/// Snapshot of one task, `None` once it has been deleted
pub fn store_task(store: &AppStore, id: TaskId) -> Option<Task> {
    store.list().with(|list| list.get(id).cloned())
}

pub fn store_mode(store: &AppStore, id: TaskId) -> RowMode {
    store.list().with(|list| list.mode_of(id))
}

pub fn store_input_enabled(store: &AppStore) -> bool {
    store.list().with(|list| list.input_enabled())
}
