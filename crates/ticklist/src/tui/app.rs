use anyhow::{Context, Result};
use ticklist_core::{Task, TaskFilter, TaskId, TaskList};
use ticklist_store_json::JsonStore;

use super::task_visibility::TaskVisibility;

/// Application state shared between the event loop and rendering: the task
/// collection, its persistence mirror, and the visibility bookkeeping.
///
/// Every mutation here follows the same sequence: apply the change to the
/// in-memory collection, rebuild the visibility, then mirror the whole
/// collection to the store. A failed mirror leaves the in-memory change
/// applied; the error only carries the save failure.
pub(super) struct App {
    store: JsonStore,
    tasks: TaskList,
    visibility: TaskVisibility,
}

impl App {
    /// Hydrate the collection from the store. This is the only load of the
    /// session; afterwards the in-memory collection is authoritative.
    pub(super) fn new(store: JsonStore) -> Self {
        let tasks = store.load();
        let mut app = Self {
            store,
            tasks,
            visibility: TaskVisibility::default(),
        };
        app.rebuild_visibility(None);
        app
    }

    pub(super) const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub(super) const fn visibility(&self) -> &TaskVisibility {
        &self.visibility
    }

    pub(super) fn visibility_mut(&mut self) -> &mut TaskVisibility {
        &mut self.visibility
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        self.visibility.selected_task(self.tasks.as_slice())
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id)
    }

    pub(super) fn rebuild_visibility(&mut self, preferred: Option<TaskId>) {
        self.visibility.rebuild(self.tasks.as_slice(), preferred);
    }

    pub(super) fn set_filter(&mut self, filter: TaskFilter) {
        if self.visibility.filter() == &filter {
            return;
        }
        let keep = self.selected_task_id();
        self.visibility.set_filter(filter);
        self.rebuild_visibility(keep);
    }

    /// Update the search term, leaving the completion mode untouched.
    pub(super) fn set_search(&mut self, search: &str) {
        let mut filter = self.visibility.filter().clone();
        search.clone_into(&mut filter.search);
        self.set_filter(filter);
    }

    /// Add a task, select it, and mirror. `Ok(None)` means the input was
    /// blank and nothing happened.
    pub(super) fn add_task(&mut self, text: &str) -> Result<Option<TaskId>> {
        let Some(id) = self.tasks.add(text) else {
            return Ok(None);
        };
        self.rebuild_visibility(Some(id));
        self.mirror()?;
        Ok(Some(id))
    }

    /// Flip completion on `id` and mirror. `Ok(false)` means no such task.
    pub(super) fn toggle_task(&mut self, id: TaskId) -> Result<bool> {
        if !self.tasks.toggle(id) {
            return Ok(false);
        }
        self.rebuild_visibility(Some(id));
        self.mirror()?;
        Ok(true)
    }

    /// Replace the text of `id` and mirror. `Ok(false)` means the edit was
    /// cancelled (blank input) or the task is gone.
    pub(super) fn edit_task(&mut self, id: TaskId, text: &str) -> Result<bool> {
        if !self.tasks.edit(id, text) {
            return Ok(false);
        }
        self.rebuild_visibility(Some(id));
        self.mirror()?;
        Ok(true)
    }

    /// Remove `id` and mirror. Removing an unknown id is a quiet no-op.
    pub(super) fn remove_task(&mut self, id: TaskId) -> Result<bool> {
        if !self.tasks.remove(id) {
            return Ok(false);
        }
        self.rebuild_visibility(None);
        self.mirror()?;
        Ok(true)
    }

    /// Drop every completed task and mirror, reporting how many went away.
    pub(super) fn clear_completed(&mut self) -> Result<usize> {
        let removed = self.tasks.clear_completed();
        if removed == 0 {
            return Ok(0);
        }
        self.rebuild_visibility(None);
        self.mirror()?;
        Ok(removed)
    }

    fn mirror(&self) -> Result<()> {
        self.store
            .save(&self.tasks)
            .with_context(|| format!("failed to save tasks to {}", self.store.path().display()))
    }
}
