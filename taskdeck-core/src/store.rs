//! In-memory task store with sequential id assignment.
//!
//! [`TaskStore`] owns the ordered task sequence and the `next_id`
//! counter. Lookup is a linear scan by id, which is adequate at
//! console scale. The store is single-threaded by design: it is owned
//! exclusively by the console loop and needs no locking.

use thiserror::Error;

use crate::task::{Task, TaskId};

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Task title cannot be empty.
    #[error("task title cannot be empty")]
    TitleEmpty,
    /// Task with the given ID was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Ordered in-memory collection of tasks.
///
/// Tasks are kept in creation order; deletion shifts later entries down
/// without reordering them. Ids are dense over successful additions and
/// monotonically increasing for the process lifetime — a deleted id is
/// never handed out again.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates a new, empty store with the id counter at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a new task with the next sequential id.
    ///
    /// The title must be non-empty as given; it is not trimmed before
    /// the check. On failure nothing is created and the id counter does
    /// not advance.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TitleEmpty`] if `title` is empty.
    pub fn add(&mut self, title: &str, description: &str) -> Result<&Task, StoreError> {
        if title.is_empty() {
            return Err(StoreError::TitleEmpty);
        }

        let task = Task {
            id: TaskId::from_raw(self.next_id),
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
        };
        let pos = self.tasks.len();
        self.tasks.push(task);
        self.next_id += 1;
        Ok(&self.tasks[pos])
    }

    /// Returns all tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Marks the task with the given id as completed.
    ///
    /// Idempotent: completing an already-completed task succeeds and
    /// leaves the store in the same state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if no task has the given id;
    /// the store is left unchanged.
    pub fn complete(&mut self, id: TaskId) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.completed = true;
        Ok(())
    }

    /// Removes the task with the given id, returning it.
    ///
    /// The order of the remaining tasks is preserved. The id counter is
    /// unaffected: the removed id is never reused.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if no task has the given id;
    /// the store is left unchanged.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        Ok(self.tasks.remove(pos))
    }

    /// Returns the number of tasks currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the id that the next successful `add` will assign.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }
}
