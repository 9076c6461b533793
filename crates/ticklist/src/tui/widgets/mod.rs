pub(super) mod entry_bar;
pub(super) mod filter_tabs;
pub(super) mod status_bar;
pub(super) mod task_list;
pub(super) mod util;
