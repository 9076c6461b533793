//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Highlight symbol shown beside the selected task.
pub const TASK_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Cursor glyph spliced into the entry bar while typing.
pub const ENTRY_CURSOR_GLYPH: &str = "█";
/// Characters of the task id shown in the meta line.
pub const META_ID_CHARS: usize = 8;
