use crate::Task;

/// Case-insensitive substring matcher for task text.
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// Normalize a query string into a matcher. Returns `None` for the empty
    /// query; whitespace inside a non-empty query is significant.
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        Some(Self {
            needle: query.to_lowercase(),
        })
    }

    /// Determine whether the task text contains the query.
    pub fn matches(&self, task: &Task) -> bool {
        task.text.to_lowercase().contains(&self.needle)
    }
}
