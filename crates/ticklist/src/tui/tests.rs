use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tempfile::TempDir;
use ticklist_core::TaskId;
use ticklist_store_json::JsonStore;
use time::macros::datetime;

use super::app::App;
use super::clipboard::ClipboardSink;
use super::constants::META_ID_CHARS;
use super::view::{MessageLevel, Ui};
use super::widgets::util::{format_created, short_id, truncate_with_ellipsis};

fn expect_some<T>(value: Option<T>, ctx: &str) -> T {
    value.map_or_else(|| panic!("{ctx}"), |inner| inner)
}

struct NoopClipboard;

impl ClipboardSink for NoopClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl RecordingClipboard {
    fn new(writes: Rc<RefCell<Vec<String>>>) -> Self {
        Self { writes }
    }
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

struct FailingClipboard {
    message: String,
}

impl FailingClipboard {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ClipboardSink for FailingClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(anyhow!(self.message.clone()))
    }
}

fn temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|err| panic!("failed to create temp dir: {err}"))
}

fn store_in(dir: &TempDir) -> JsonStore {
    JsonStore::open(dir.path().join("tasks.json"))
}

fn test_ui() -> (Ui, TempDir) {
    let dir = temp_dir();
    let app = App::new(store_in(&dir));
    (Ui::with_clipboard(app, Box::new(NoopClipboard)), dir)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(ui: &mut Ui, text: &str) {
    for c in text.chars() {
        ui.handle_key(key(KeyCode::Char(c)));
    }
}

fn add_task(ui: &mut Ui, text: &str) {
    ui.handle_key(key(KeyCode::Char('a')));
    type_text(ui, text);
    ui.handle_key(key(KeyCode::Enter));
    ui.handle_key(key(KeyCode::Esc));
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn truncate_with_ellipsis_returns_borrowed_when_short() {
    let text = "Short task";
    assert!(matches!(
        truncate_with_ellipsis(text, 20),
        Cow::Borrowed(result) if result == text
    ));
}

#[test]
fn truncate_with_ellipsis_handles_multibyte_text() {
    let text = "あいうえおかきくけこ";
    assert_eq!(truncate_with_ellipsis(text, 5), "あい...");
}

#[test]
fn truncate_with_ellipsis_keeps_grapheme_clusters_intact() {
    let text = "a\u{0301}bcdef";
    assert_eq!(truncate_with_ellipsis(text, 4), "a\u{0301}...");
}

#[test]
fn short_id_takes_a_uuid_prefix() {
    let id = TaskId::new();
    let full = id.to_string();
    assert_eq!(short_id(id), &full[..META_ID_CHARS]);
}

#[test]
fn format_created_shows_the_date_portion() {
    let stamp = datetime!(2024-05-01 12:30 UTC);
    assert_eq!(format_created(stamp), "2024-05-01");
}

#[test]
fn yank_copies_the_selected_text() {
    let dir = temp_dir();
    let writes = Rc::new(RefCell::new(Vec::new()));
    let clipboard = RecordingClipboard::new(Rc::clone(&writes));
    let app = App::new(store_in(&dir));
    let mut ui = Ui::with_clipboard(app, Box::new(clipboard));

    add_task(&mut ui, "Buy milk");
    ui.handle_key(key(KeyCode::Char('y')));

    assert_eq!(*writes.borrow(), vec![String::from("Buy milk")]);
    let message = expect_some(ui.message.as_ref(), "copy must surface a message");
    assert_eq!(message.level, MessageLevel::Info);
}

#[test]
fn yank_failure_surfaces_the_error() {
    let dir = temp_dir();
    let app = App::new(store_in(&dir));
    let mut ui = Ui::with_clipboard(app, Box::new(FailingClipboard::new("clipboard closed")));

    add_task(&mut ui, "Buy milk");
    ui.handle_key(key(KeyCode::Char('y')));

    let message = expect_some(ui.message.as_ref(), "copy failure must surface a message");
    assert_eq!(message.level, MessageLevel::Error);
    assert!(message.text.starts_with("Copy failed"));
    assert!(message.text.contains("clipboard closed"));
}

#[test]
fn add_flow_persists_to_the_store() {
    let dir = temp_dir();
    let app = App::new(store_in(&dir));
    let mut ui = Ui::with_clipboard(app, Box::new(NoopClipboard));

    add_task(&mut ui, "Buy milk");
    add_task(&mut ui, "Walk dog");
    ui.handle_key(key(KeyCode::Char(' ')));

    let reloaded = store_in(&dir).load();
    assert_eq!(&reloaded, ui.app.tasks());
}

#[test]
fn save_failure_keeps_the_in_memory_change() {
    let dir = temp_dir();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory")
        .unwrap_or_else(|err| panic!("failed to write blocker file: {err}"));

    let store = JsonStore::open(blocker.join("tasks.json"));
    let app = App::new(store);
    let mut ui = Ui::with_clipboard(app, Box::new(NoopClipboard));

    ui.handle_key(key(KeyCode::Char('a')));
    type_text(&mut ui, "Buy milk");
    ui.handle_key(key(KeyCode::Enter));

    // The collection keeps the task; only the mirror failed.
    assert_eq!(ui.app.tasks().len(), 1);
    assert_eq!(ui.input.text(), "");
    let message = expect_some(ui.message.as_ref(), "save failure must surface a message");
    assert_eq!(message.level, MessageLevel::Error);
}

#[test]
fn tick_keeps_fresh_messages() {
    let (mut ui, _dir) = test_ui();
    ui.error("boom");
    ui.tick();
    assert!(ui.message.is_some());
}

#[test]
fn draw_shows_the_empty_state() -> Result<()> {
    let (ui, _dir) = test_ui();
    let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
    terminal.draw(|f| ui.draw(f))?;

    let text = buffer_text(&terminal);
    assert!(text.contains("No tasks yet. Add one to get started."));
    assert!(text.contains("All (0)"));
    assert!(text.contains("press a to add, / to search"));
    Ok(())
}

#[test]
fn draw_shows_tasks_counts_and_hints() -> Result<()> {
    let (mut ui, _dir) = test_ui();
    add_task(&mut ui, "Buy milk");
    add_task(&mut ui, "Walk dog");
    ui.handle_key(key(KeyCode::Char(' ')));

    let mut terminal = Terminal::new(TestBackend::new(100, 24))?;
    terminal.draw(|f| ui.draw(f))?;

    let text = buffer_text(&terminal);
    assert!(text.contains("[ ] Buy milk"));
    assert!(text.contains("[x] Walk dog"));
    assert!(text.contains("Active (1)"));
    assert!(text.contains("Done (1)"));
    assert!(text.contains("1 task remaining"));
    assert!(text.contains("c: clear done"));
    Ok(())
}

#[test]
fn draw_shows_the_search_empty_state() -> Result<()> {
    let (mut ui, _dir) = test_ui();
    add_task(&mut ui, "Buy milk");
    ui.handle_key(key(KeyCode::Char('/')));
    type_text(&mut ui, "zz");

    let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
    terminal.draw(|f| ui.draw(f))?;

    let text = buffer_text(&terminal);
    assert!(text.contains("No tasks match your search."));
    Ok(())
}

#[test]
fn draw_survives_a_tiny_terminal() -> Result<()> {
    let (mut ui, _dir) = test_ui();
    add_task(&mut ui, "A very long task title that cannot possibly fit");

    let mut terminal = Terminal::new(TestBackend::new(12, 6))?;
    terminal.draw(|f| ui.draw(f))?;
    ui.handle_key(key(KeyCode::Char(' ')));
    terminal.draw(|f| ui.draw(f))?;
    Ok(())
}
