use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ticklist_core::{FilterMode, TaskId};

use super::view::{Mode, Ui};

impl Ui {
    /// Route one key event according to the active mode.
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Add => self.handle_add_key(key),
            Mode::Edit(task) => self.handle_edit_key(task, key),
            Mode::Search => self.handle_search_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.app.visibility_mut().select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.app.visibility_mut().select_prev(),
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('a') => self.open_add(),
            KeyCode::Char('e') => self.open_edit(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('/') => self.open_search(),
            KeyCode::Char('1') => self.set_filter_mode(FilterMode::All),
            KeyCode::Char('2') => self.set_filter_mode(FilterMode::Active),
            KeyCode::Char('3') => self.set_filter_mode(FilterMode::Completed),
            KeyCode::Char('c') => self.clear_completed(),
            KeyCode::Char('y') => self.copy_selected_text(),
            _ => {}
        }
    }

    fn handle_add_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_add(),
            KeyCode::Esc => {
                self.input.clear();
                self.mode = Mode::Browse;
            }
            _ => self.edit_input(key),
        }
    }

    fn handle_edit_key(&mut self, task: TaskId, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_edit(task),
            KeyCode::Esc => {
                self.input.clear();
                self.mode = Mode::Browse;
            }
            _ => self.edit_input(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Esc => {
                self.input.clear();
                self.app.set_search("");
                self.mode = Mode::Browse;
            }
            _ => {
                self.edit_input(key);
                let term = self.input.text().to_owned();
                self.app.set_search(&term);
            }
        }
    }

    fn edit_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.enter_char(c);
            }
            KeyCode::Backspace => self.input.delete_char(),
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            _ => {}
        }
    }

    fn open_add(&mut self) {
        self.input.clear();
        self.mode = Mode::Add;
    }

    fn open_edit(&mut self) {
        let Some(task) = self.app.selected_task() else {
            self.error("No task selected");
            return;
        };
        let id = task.id;
        let text = task.text.clone();
        self.input.set_text(&text);
        self.mode = Mode::Edit(id);
    }

    fn open_search(&mut self) {
        let current = self.app.visibility().filter().search.clone();
        self.input.set_text(&current);
        self.mode = Mode::Search;
    }

    fn submit_add(&mut self) {
        let text = self.input.text().to_owned();
        match self.app.add_task(&text) {
            // Stay in entry mode for rapid entry; blank input keeps the
            // buffer so nothing typed is thrown away.
            Ok(Some(_)) => self.input.clear(),
            Ok(None) => {}
            Err(err) => {
                // The task itself was added; only the mirror failed.
                self.input.clear();
                self.error(format!("{err:#}"));
            }
        }
    }

    fn submit_edit(&mut self, task: TaskId) {
        let text = self.input.text().to_owned();
        self.input.clear();
        self.mode = Mode::Browse;
        // A blank buffer cancels the edit and keeps the old text.
        if let Err(err) = self.app.edit_task(task, &text) {
            self.error(format!("{err:#}"));
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.app.selected_task_id() else {
            self.error("No task selected");
            return;
        };
        if let Err(err) = self.app.toggle_task(id) {
            self.error(format!("{err:#}"));
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.app.selected_task_id() else {
            self.error("No task selected");
            return;
        };
        if let Err(err) = self.app.remove_task(id) {
            self.error(format!("{err:#}"));
        }
    }

    fn set_filter_mode(&mut self, mode: FilterMode) {
        let mut filter = self.app.visibility().filter().clone();
        filter.mode = mode;
        self.app.set_filter(filter);
    }

    fn clear_completed(&mut self) {
        match self.app.clear_completed() {
            Ok(0) => self.info("No completed tasks to clear"),
            Ok(1) => self.info("Cleared 1 completed task"),
            Ok(removed) => self.info(format!("Cleared {removed} completed tasks")),
            Err(err) => self.error(format!("{err:#}")),
        }
    }

    fn copy_selected_text(&mut self) {
        let Some(task) = self.app.selected_task() else {
            self.error("No task selected");
            return;
        };
        let text = task.text.clone();
        match self.clipboard.set_text(&text) {
            Ok(()) => self.info("Copied task text"),
            Err(err) => self.error(format!("Copy failed: {err:#}")),
        }
    }
}
