use std::borrow::Cow;

use ticklist_core::TaskId;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::constants::META_ID_CHARS;

const ELLIPSIS: &str = "...";
const ELLIPSIS_GRAPHEMES: usize = 3;

/// Truncate `input` to at most `max_graphemes` graphemes, appending an
/// ellipsis when content is dropped.
pub(in crate::tui) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> Cow<'_, str> {
    let total = input.graphemes(true).count();
    if total <= max_graphemes {
        return Cow::Borrowed(input);
    }
    if max_graphemes <= ELLIPSIS_GRAPHEMES {
        return Cow::Owned(input.graphemes(true).take(max_graphemes).collect());
    }
    let keep = max_graphemes - ELLIPSIS_GRAPHEMES;
    let mut truncated: String = input.graphemes(true).take(keep).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

/// Leading characters of a task id, enough to tell tasks apart at a glance.
pub(in crate::tui) fn short_id(id: TaskId) -> String {
    id.to_string().chars().take(META_ID_CHARS).collect()
}

/// Creation timestamp reduced to its date portion.
pub(in crate::tui) fn format_created(created_at: OffsetDateTime) -> String {
    created_at.format(&Rfc3339).map_or_else(
        |_| String::from("unknown"),
        |stamp| stamp.chars().take(10).collect(),
    )
}
