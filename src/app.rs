//! To-do Frontend App
//!
//! Root component: loads the UI config, seeds the store and provides it to the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TaskListView;
use crate::config::UiConfig;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::load();
    web_sys::console::log_1(&format!("[APP] Seeding {} tasks", config.seed.len()).into());

    let store = Store::new(AppState::new(config.initial_list(), config.affordances));
    provide_context(store);

    view! {
        <main class="app">
            <h3>{config.heading}</h3>
            <TaskListView />
        </main>
    }
}
