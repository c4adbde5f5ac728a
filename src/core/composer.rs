use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::utils::input::sanitize_line_input;

/// Single-line input buffer with a grapheme-cluster cursor.
///
/// The cursor counts grapheme clusters rather than bytes or chars, so
/// arrow keys and backspace treat emoji and combining accents as one
/// position. Byte offsets are derived on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    text: String,
    cursor: usize,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in grapheme clusters from the start of the line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Display width in columns of the text left of the cursor.
    pub fn cursor_column(&self) -> u16 {
        self.text[..self.byte_offset_at(self.cursor)].width() as u16
    }

    fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn byte_offset_at(&self, index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    /// Inserts sanitized text at the cursor. Line breaks in pasted text
    /// collapse to spaces so the buffer stays one line.
    pub fn insert_str(&mut self, text: &str) {
        let clean = sanitize_line_input(text);
        if clean.is_empty() {
            return;
        }
        let inserted = clean.graphemes(true).count();
        let at = self.byte_offset_at(self.cursor);
        self.text.insert_str(at, &clean);
        self.cursor += inserted;
    }

    /// Removes the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset_at(self.cursor - 1);
        let end = self.byte_offset_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Removes the grapheme under the cursor.
    pub fn delete(&mut self) {
        let start = self.byte_offset_at(self.cursor);
        if start == self.text.len() {
            return;
        }
        let end = self.byte_offset_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Hands the composed text to the caller and resets the buffer, or
    /// returns `None` without touching anything when the text is blank.
    /// Whitespace-only lines count as blank.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.text.trim().is_empty() {
            return None;
        }
        self.cursor = 0;
        Some(std::mem::take(&mut self.text))
    }
}
