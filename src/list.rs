//! Task List Controller
//!
//! The in-memory task list and the transitions applied to it by row intents.
//! Every transition either succeeds or leaves the list untouched.

use thiserror::Error;

use crate::models::{RowMode, Task, TaskId};

/// A mutation requested by a row or by the new-task input
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetDone { id: TaskId, done: bool },
    Delete(TaskId),
    Add(String),
    BeginEdit(TaskId),
    /// `None` cancels; `Some` with a non-empty title renames
    FinishEdit { id: TaskId, title: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("no task with id {0}")]
    UnknownTask(TaskId),
    #[error("task title is empty")]
    EmptyTitle,
    #[error("task {editing} is already being edited")]
    EditInProgress { editing: TaskId },
}

/// Ordered tasks plus the id of the row in edit mode, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    editing: Option<TaskId>,
    next_id: u32,
}

impl TaskList {
    /// Build a list from `(title, done)` pairs, assigning fresh ids in order.
    /// Entries with an empty title are skipped, as `add` would reject them.
    pub fn seeded<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for (title, done) in seed {
            let title = title.into();
            if title.is_empty() {
                continue;
            }
            let id = list.allocate_id();
            list.tasks.push(Task { id, title, done });
        }
        list
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Current display position of a task
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Ids in display order
    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id).collect()
    }

    /// Number of tasks not yet done
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    /// The new-task input accepts text only while no row is being edited
    pub fn input_enabled(&self) -> bool {
        self.editing.is_none()
    }

    pub fn mode_of(&self, id: TaskId) -> RowMode {
        match self.editing {
            Some(editing) if editing == id => RowMode::Edit,
            Some(_) => RowMode::Passive,
            None => RowMode::Active,
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Result<(), IntentError> {
        match intent {
            Intent::SetDone { id, done } => self.set_done(id, done),
            Intent::Delete(id) => self.delete(id),
            Intent::Add(title) => self.add(title).map(|_| ()),
            Intent::BeginEdit(id) => self.begin_edit(id),
            Intent::FinishEdit { id, title } => self.finish_edit(id, title),
        }
    }

    pub fn set_done(&mut self, id: TaskId, done: bool) -> Result<(), IntentError> {
        self.task_mut(id)?.done = done;
        Ok(())
    }

    pub fn delete(&mut self, id: TaskId) -> Result<(), IntentError> {
        let index = self.position(id).ok_or(IntentError::UnknownTask(id))?;
        self.tasks.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
        }
        Ok(())
    }

    /// Append a not-done task and return its id
    pub fn add(&mut self, title: impl Into<String>) -> Result<TaskId, IntentError> {
        let title = title.into();
        if title.is_empty() {
            return Err(IntentError::EmptyTitle);
        }
        let id = self.allocate_id();
        self.tasks.push(Task { id, title, done: false });
        Ok(id)
    }

    pub fn begin_edit(&mut self, id: TaskId) -> Result<(), IntentError> {
        if self.get(id).is_none() {
            return Err(IntentError::UnknownTask(id));
        }
        match self.editing {
            Some(editing) if editing != id => Err(IntentError::EditInProgress { editing }),
            _ => {
                self.editing = Some(id);
                Ok(())
            }
        }
    }

    pub fn finish_edit(&mut self, id: TaskId, title: Option<String>) -> Result<(), IntentError> {
        let task = self.task_mut(id)?;
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            task.title = title;
        }
        self.editing = None;
        Ok(())
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut Task, IntentError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(IntentError::UnknownTask(id))
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
impl TaskList {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }
}
