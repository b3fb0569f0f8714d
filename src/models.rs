//! Frontend Models
//!
//! Task records and the per-row display mode.

use std::fmt;

/// Stable task identifier, allocated once per task and never reused within a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl Task {
    /// Glyph shown in front of the title
    pub fn glyph(&self) -> &'static str {
        if self.done { "[X]" } else { "[ ]" }
    }
}

/// How a row renders, derived from the list's editing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    /// Nothing is being edited: toggle, delete and edit are available
    Active,
    /// Another row is being edited: read-only
    Passive,
    /// This row is being edited
    Edit,
}
