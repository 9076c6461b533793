use std::collections::HashMap;

use ticklist_core::{Task, TaskFilter, TaskId};

/// Manages the visible subset and the selection, independent of rendering.
///
/// `rebuild` applies the same filter predicate the view derivation uses, so
/// its visible indices line up with the derived view position by position.
#[derive(Debug, Default)]
pub(super) struct TaskVisibility {
    filter: TaskFilter,
    visible: Vec<usize>,
    visible_index: HashMap<TaskId, usize>,
    selected: usize,
}

#[allow(clippy::missing_const_for_fn)]
impl TaskVisibility {
    pub(super) fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    pub(super) fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Recompute the visible set from `tasks`, keeping the selection on
    /// `preferred` when that task is still visible.
    pub(super) fn rebuild(&mut self, tasks: &[Task], preferred: Option<TaskId>) {
        self.visible.clear();
        self.visible_index.clear();

        if tasks.is_empty() {
            self.selected = 0;
            return;
        }

        for (idx, task) in tasks.iter().enumerate() {
            if self.filter.matches(task) {
                let pos = self.visible.len();
                self.visible.push(idx);
                self.visible_index.insert(task.id, pos);
            }
        }

        self.selected = self.resolve_selection(preferred);
    }

    fn resolve_selection(&self, preferred: Option<TaskId>) -> usize {
        if self.visible.is_empty() {
            return 0;
        }
        if let Some(id) = preferred
            && let Some(&index) = self.visible_index.get(&id)
        {
            return index;
        }
        self.selected.min(self.visible.len() - 1)
    }

    pub(super) fn has_visible_tasks(&self) -> bool {
        !self.visible.is_empty()
    }

    #[cfg(test)]
    pub(super) fn visible_indexes(&self) -> &[usize] {
        &self.visible
    }

    pub(super) fn selected_index(&self) -> usize {
        self.selected
    }

    pub(super) fn selected_task<'a>(&self, tasks: &'a [Task]) -> Option<&'a Task> {
        self.visible.get(self.selected).and_then(|&idx| tasks.get(idx))
    }

    pub(super) fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub(super) fn select_prev(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        }
    }
}
