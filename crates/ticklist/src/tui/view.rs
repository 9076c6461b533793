use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};
use ticklist_core::TaskId;

use super::app::App;
use super::clipboard::{ClipboardSink, default_clipboard};
use super::constants::UI_MESSAGE_TTL_SECS;
use super::input::InputField;

/// Input mode of the UI; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mode {
    /// Navigate the list; keys act on the selected task.
    Browse,
    /// The entry bar captures text for a new task.
    Add,
    /// The entry bar edits the text of the given task.
    Edit(TaskId),
    /// The entry bar edits the live search term.
    Search,
}

pub(super) struct Ui {
    pub(super) app: App,
    pub(super) mode: Mode,
    pub(super) input: InputField,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    pub(super) clipboard: Box<dyn ClipboardSink>,
}

impl Ui {
    pub(super) const ENTRY_HEIGHT: u16 = 3;
    pub(super) const FILTER_HEIGHT: u16 = 3;
    pub(super) const MAIN_MIN_HEIGHT: u16 = 5;
    pub(super) const STATUS_HEIGHT: u16 = 3;

    pub(super) fn new(app: App) -> Self {
        Self::with_clipboard(app, default_clipboard())
    }

    pub(super) fn with_clipboard(app: App, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            app,
            mode: Mode::Browse,
            input: InputField::default(),
            message: None,
            should_quit: false,
            clipboard,
        }
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::ENTRY_HEIGHT),
                Constraint::Length(Self::FILTER_HEIGHT),
                Constraint::Min(Self::MAIN_MIN_HEIGHT),
                Constraint::Length(Self::STATUS_HEIGHT),
            ])
            .split(f.area());

        // Rendering and the selection bookkeeping apply the same filter, so
        // the derived view lines up with the visibility indices.
        let view = self.app.tasks().view(self.app.visibility().filter());

        self.draw_entry_bar(f, chunks[0]);
        self.draw_filter_tabs(f, chunks[1], &view);
        self.draw_task_list(f, chunks[2], &view);
        self.draw_status_bar(f, chunks[3], &view);
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }
}
