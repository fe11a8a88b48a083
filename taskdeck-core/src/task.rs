//! Task record types.

/// Unique identifier for a task.
///
/// Ids are assigned sequentially starting at 1 and are never reused for
/// the lifetime of the process, even after the task is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw integer value.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
///
/// `title` is guaranteed non-empty by [`TaskStore::add`]; `description`
/// may be empty. `completed` starts `false` and only ever transitions to
/// `true` (there is no un-complete operation).
///
/// [`TaskStore::add`]: crate::store::TaskStore::add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique, sequentially assigned identifier.
    pub id: TaskId,
    /// Short non-empty summary of the task.
    pub title: String,
    /// Free-form detail text, may be empty.
    pub description: String,
    /// Whether the task has been marked completed.
    pub completed: bool,
}

impl Task {
    /// Returns the display label for the task's completion state.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }
}
