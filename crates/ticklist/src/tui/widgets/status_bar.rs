use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ticklist_core::ListView;

use crate::tui::view::{Mode, Ui};

impl Ui {
    pub(in crate::tui) fn draw_status_bar(
        &self,
        f: &mut Frame<'_>,
        area: Rect,
        view: &ListView<'_>,
    ) {
        let (content, style) = self.message.as_ref().map_or_else(
            || (self.status_line(view), Style::default()),
            |message| (message.text.clone(), message.style()),
        );
        let paragraph = Paragraph::new(content)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Status").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn status_line(&self, view: &ListView<'_>) -> String {
        let counts = view.counts;
        let remaining = if counts.active == 1 {
            String::from("1 task remaining")
        } else {
            format!("{} tasks remaining", counts.active)
        };
        let mut parts = vec![remaining];
        if counts.completed > 0 {
            parts.push(String::from("c: clear done"));
        }
        parts.push(String::from(self.key_hints()));
        parts.join(" · ")
    }

    const fn key_hints(&self) -> &'static str {
        match self.mode {
            Mode::Browse => {
                "a: add · e: edit · d: delete · space: toggle · /: search · 1/2/3: filter · y: copy · q: quit"
            }
            Mode::Add => "enter: add task · esc: back",
            Mode::Edit(_) => "enter: save · esc: cancel",
            Mode::Search => "enter: keep search · esc: clear",
        }
    }
}
