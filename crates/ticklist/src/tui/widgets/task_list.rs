use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use ticklist_core::{ListView, Task};

use crate::tui::constants::TASK_LIST_HIGHLIGHT_SYMBOL;
use crate::tui::view::Ui;

use super::util::{format_created, short_id, truncate_with_ellipsis};

impl Ui {
    pub(in crate::tui) fn draw_task_list(&self, f: &mut Frame<'_>, area: Rect, view: &ListView<'_>) {
        let items: Vec<ListItem<'static>> = if view.visible.is_empty() {
            let message = if self.app.tasks().is_empty() {
                "No tasks yet. Add one to get started."
            } else {
                "No tasks match your search."
            };
            vec![ListItem::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::DarkGray),
            )))]
        } else {
            view.visible
                .iter()
                .map(|task| task_item(task, area.width))
                .collect()
        };

        let mut state = ListState::default();
        if self.app.visibility().has_visible_tasks() {
            state.select(Some(self.app.visibility().selected_index()));
        }

        let list = List::new(items)
            .block(Block::default().title("Tasks").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(TASK_LIST_HIGHLIGHT_SYMBOL);
        f.render_stateful_widget(list, area, &mut state);
    }
}

fn task_item(task: &Task, width: u16) -> ListItem<'static> {
    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    let title_style = if task.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    // Borders, the highlight symbol, and the checkbox eat eight columns.
    let text_width = usize::from(width).saturating_sub(8).max(1);
    let title = format!("{checkbox}{}", truncate_with_ellipsis(&task.text, text_width));
    let meta = format!(
        "    {} · {}",
        short_id(task.id),
        format_created(task.created_at)
    );
    ListItem::new(vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(Span::styled(meta, Style::default().fg(Color::DarkGray))),
    ])
}
