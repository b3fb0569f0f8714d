//! UI Configuration
//!
//! Optional settings embedded in the page shell as
//! `<script type="application/json" id="todo-config">`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::list::TaskList;

/// Id of the element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

/// When the [DEL]/[EDIT] affordances of an active row are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordanceVisibility {
    Always,
    #[default]
    OnHover,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedTask {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub heading: String,
    pub affordances: AffordanceVisibility,
    pub seed: Vec<SeedTask>,
}

impl Default for UiConfig {
    fn default() -> Self {
        let seed = (1..=6)
            .map(|n| SeedTask {
                title: format!("Task {}", n),
                done: n == 3,
            })
            .collect();
        Self {
            heading: "Hello App!".to_string(),
            affordances: AffordanceVisibility::default(),
            seed,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid UI config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl UiConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Seed entries that `initial_list` drops because their title is empty
    pub fn blank_seed_count(&self) -> usize {
        self.seed.iter().filter(|t| t.title.is_empty()).count()
    }

    /// Initial task list built from the seed
    pub fn initial_list(&self) -> TaskList {
        TaskList::seeded(self.seed.iter().map(|t| (t.title.clone(), t.done)))
    }

    /// Read the config element from the current document.
    /// Falls back to defaults when it is absent or malformed.
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(text) = text else {
            return Self::default();
        };
        match Self::from_json(&text) {
            Ok(config) => {
                let blank = config.blank_seed_count();
                if blank > 0 {
                    web_sys::console::warn_1(
                        &format!("[CONFIG] dropping {} seed task(s) with an empty title", blank).into(),
                    );
                }
                config
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", err).into());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_matches_mock_tasks() {
        let config = UiConfig::default();
        let list = config.initial_list();

        assert_eq!(list.len(), 6);
        assert_eq!(list.tasks()[0].title, "Task 1");
        assert!(list.tasks()[2].done);
        assert_eq!(list.remaining(), 5);
        assert_eq!(config.affordances, AffordanceVisibility::OnHover);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = UiConfig::from_json(r#"{ "affordances": "always" }"#).unwrap();

        assert_eq!(config.affordances, AffordanceVisibility::Always);
        assert_eq!(config.heading, "Hello App!");
        assert_eq!(config.seed.len(), 6);
    }

    #[test]
    fn test_seed_override() {
        let config = UiConfig::from_json(
            r#"{ "heading": "Chores", "seed": [{ "title": "Dishes" }, { "title": "Laundry", "done": true }] }"#,
        )
        .unwrap();
        let list = config.initial_list();

        assert_eq!(config.heading, "Chores");
        assert_eq!(list.len(), 2);
        assert!(!list.tasks()[0].done);
        assert!(list.tasks()[1].done);
    }

    #[test]
    fn test_seed_with_empty_title_is_dropped() {
        let config = UiConfig::from_json(r#"{ "seed": [{ "title": "" }, { "title": "Dishes" }] }"#).unwrap();
        let list = config.initial_list();

        assert_eq!(config.blank_seed_count(), 1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].title, "Dishes");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            UiConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(UiConfig::from_json(r#"{ "affordances": "sometimes" }"#).is_err());
    }
}
