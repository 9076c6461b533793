//! Domain types for ticklist: the ordered task collection and its derived views.

/// View filtering (completion mode + search term).
pub mod filter;
/// Identifier types.
pub mod id;
/// Case-insensitive text search.
pub mod text_matcher;

pub use crate::filter::{FilterMode, TaskFilter};
pub use crate::id::TaskId;
pub use crate::text_matcher::TextMatcher;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single task entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier of the task, assigned at creation.
    pub id: TaskId,
    /// Display text. Never empty or whitespace-only.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation instant in UTC, kept for display.
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Task {
    fn new(text: String) -> Self {
        Self {
            id: TaskId::new(),
            text,
            completed: false,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Ordered task collection, newest first.
///
/// Every mutation goes through the named operations below. Each one is total
/// and leaves the collection valid: ids stay unique, stored text is never
/// blank, and the insertion order never changes under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a task holding the trimmed `text` at the front of the collection.
    ///
    /// Blank input leaves the collection untouched and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let task = Task::new(trimmed.to_owned());
        let id = task.id;
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Flip the completion flag of the matching task.
    ///
    /// Returns `false` when no task carries `id`.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        self.task_mut(id).is_some_and(|task| {
            task.completed = !task.completed;
            true
        })
    }

    /// Replace the text of the matching task with the trimmed input.
    ///
    /// Blank input cancels the edit: the stored text is retained and `false`
    /// comes back, same as for an unknown `id`.
    pub fn edit(&mut self, id: TaskId, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.task_mut(id).is_some_and(|task| {
            trimmed.clone_into(&mut task.text);
            true
        })
    }

    /// Remove the matching task. Removing an absent `id` is a no-op.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Drop every completed task, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        before - self.tasks.len()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Iterate tasks in collection order (newest first).
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Number of tasks, ignoring any filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Borrow the tasks as a slice in collection order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Tally the whole collection, independent of any filter.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        let total = self.tasks.len();
        let active = self.tasks.iter().filter(|task| !task.completed).count();
        TaskCounts {
            total,
            active,
            completed: total - active,
        }
    }

    /// Derive the view for `filter`: the visible tasks in collection order
    /// plus the unfiltered tallies.
    #[must_use]
    pub fn view(&self, filter: &TaskFilter) -> ListView<'_> {
        let visible = self
            .tasks
            .iter()
            .filter(|task| filter.matches(task))
            .collect();
        ListView {
            visible,
            counts: self.counts(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tallies over the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// All tasks.
    pub total: usize,
    /// Tasks not completed yet.
    pub active: usize,
    /// Completed tasks.
    pub completed: usize,
}

/// Result of deriving a view: the visible subset plus the overall tallies.
#[derive(Debug)]
pub struct ListView<'a> {
    /// Visible tasks in collection order.
    pub visible: Vec<&'a Task>,
    /// Tallies of the underlying collection, not of the visible subset.
    pub counts: TaskCounts,
}
