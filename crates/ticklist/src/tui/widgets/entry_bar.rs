use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::view::{Mode, Ui};

impl Ui {
    pub(in crate::tui) fn draw_entry_bar(&self, f: &mut Frame<'_>, area: Rect) {
        let (title, content, style) = match self.mode {
            Mode::Browse => {
                let search = &self.app.visibility().filter().search;
                if search.is_empty() {
                    (
                        "New task",
                        String::from("press a to add, / to search"),
                        Style::default().fg(Color::DarkGray),
                    )
                } else {
                    (
                        "Search",
                        format!("filtering by \"{search}\""),
                        Style::default().fg(Color::Yellow),
                    )
                }
            }
            Mode::Add => (
                "New task",
                self.input.display_with_cursor(),
                Style::default(),
            ),
            Mode::Edit(_) => (
                "Edit task",
                self.input.display_with_cursor(),
                Style::default(),
            ),
            Mode::Search => (
                "Search",
                self.input.display_with_cursor(),
                Style::default(),
            ),
        };
        let paragraph = Paragraph::new(content)
            .style(style)
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
