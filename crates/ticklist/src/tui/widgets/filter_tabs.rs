use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
};
use ticklist_core::{FilterMode, ListView};

use crate::tui::view::Ui;

impl Ui {
    pub(in crate::tui) fn draw_filter_tabs(
        &self,
        f: &mut Frame<'_>,
        area: Rect,
        view: &ListView<'_>,
    ) {
        let counts = view.counts;
        let titles = vec![
            format!("{} ({})", FilterMode::All.label(), counts.total),
            format!("{} ({})", FilterMode::Active.label(), counts.active),
            format!("{} ({})", FilterMode::Completed.label(), counts.completed),
        ];
        let selected = match self.app.visibility().filter().mode {
            FilterMode::All => 0,
            FilterMode::Active => 1,
            FilterMode::Completed => 2,
        };
        let tabs = Tabs::new(titles)
            .block(Block::default().title("Filter").borders(Borders::ALL))
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, area);
    }
}
