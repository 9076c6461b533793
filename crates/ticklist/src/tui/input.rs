use super::constants::ENTRY_CURSOR_GLYPH;

/// Single-line input buffer with a char-indexed cursor.
#[derive(Debug, Default)]
pub(super) struct InputField {
    text: String,
    /// Cursor position in characters, clamped to `0..=char count`.
    cursor: usize,
}

impl InputField {
    pub(super) fn text(&self) -> &str {
        &self.text
    }

    pub(super) fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.cursor = self.text.chars().count();
    }

    pub(super) fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub(super) fn enter_char(&mut self, c: char) {
        let at = self.byte_index();
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.text.remove(at);
    }

    pub(super) fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_cursor_right(&mut self) {
        self.cursor = self.clamp_cursor(self.cursor + 1);
    }

    pub(super) fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_cursor_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Byte offset of the cursor into the underlying string.
    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .map(|(idx, _)| idx)
            .nth(self.cursor)
            .unwrap_or(self.text.len())
    }

    fn clamp_cursor(&self, position: usize) -> usize {
        position.min(self.text.chars().count())
    }

    /// Buffer contents with the cursor glyph spliced in for rendering.
    pub(super) fn display_with_cursor(&self) -> String {
        let at = self.byte_index();
        let mut rendered = String::with_capacity(self.text.len() + ENTRY_CURSOR_GLYPH.len());
        rendered.push_str(&self.text[..at]);
        rendered.push_str(ENTRY_CURSOR_GLYPH);
        rendered.push_str(&self.text[at..]);
        rendered
    }
}
