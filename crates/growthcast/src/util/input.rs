//! Inline text-editing buffer with cursor rendering.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Edit buffer for a single-line field.
///
/// The cursor is a character index, not a byte index, so edits stay on
/// char boundaries whatever the terminal delivers.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    pub value: String,
    pub cursor: usize,
}

impl EditBuffer {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Byte offset of the cursor's character position.
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Render the buffer with a block cursor at the edit position.
    pub fn as_line(&self) -> Line<'static> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let mut spans = Vec::new();
        for (i, c) in self.value.chars().enumerate() {
            if i == self.cursor {
                spans.push(Span::styled(c.to_string(), cursor_style));
            } else {
                spans.push(Span::raw(c.to_string()));
            }
        }
        if self.cursor >= self.value.chars().count() {
            spans.push(Span::styled(" ", cursor_style));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_at_the_cursor() {
        let mut buf = EditBuffer::new("15");
        buf.insert_char('0');
        assert_eq!(buf.value, "150");

        buf.move_home();
        buf.insert_char('2');
        assert_eq!(buf.value, "2150");
        assert_eq!(buf.cursor, 1);

        buf.backspace();
        assert_eq!(buf.value, "150");
        assert_eq!(buf.cursor, 0);

        buf.delete();
        assert_eq!(buf.value, "50");
    }

    #[test]
    fn multibyte_characters_keep_edits_on_char_boundaries() {
        let mut buf = EditBuffer::new("100");
        buf.insert_char('é');
        buf.insert_char('5');
        assert_eq!(buf.value, "100é5");
        assert_eq!(buf.cursor, 5);

        buf.move_left();
        buf.move_left();
        buf.delete();
        assert_eq!(buf.value, "1005");

        buf.move_home();
        buf.insert_char('€');
        assert_eq!(buf.value, "€1005");
        buf.backspace();
        assert_eq!(buf.value, "1005");
        assert_eq!(buf.cursor, 0);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut buf = EditBuffer::new("7");
        buf.move_right();
        buf.move_right();
        assert_eq!(buf.cursor, 1);
        buf.move_left();
        buf.move_left();
        assert_eq!(buf.cursor, 0);
        buf.backspace();
        assert_eq!(buf.value, "7");
    }
}
