use crate::{Task, TextMatcher};

/// Which completion states a view shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Every task regardless of completion.
    #[default]
    All,
    /// Tasks that are not completed yet.
    Active,
    /// Completed tasks only.
    Completed,
}

impl FilterMode {
    /// Whether a task with the given completion flag passes this mode.
    #[must_use]
    pub const fn admits(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }

    /// Stable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Done",
        }
    }
}

/// Completion filter combined with a search term.
///
/// The two compose by intersection: a task is visible only when the mode
/// admits its completion state and the search term (if any) matches its text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Completion-state selection.
    pub mode: FilterMode,
    /// Raw search query. Empty means no text filtering.
    pub search: String,
}

impl TaskFilter {
    /// Filter with the given mode and no search term.
    #[must_use]
    pub const fn with_mode(mode: FilterMode) -> Self {
        Self {
            mode,
            search: String::new(),
        }
    }

    /// Whether this filter can hide anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mode == FilterMode::All && self.search.is_empty()
    }

    /// Whether `task` belongs to the view this filter describes.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if !self.mode.admits(task.completed) {
            return false;
        }
        TextMatcher::new(&self.search).is_none_or(|matcher| matcher.matches(task))
    }
}
