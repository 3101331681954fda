/// Line-based text buffer with a cursor.
///
/// Columns are counted in chars, not display cells; wide glyphs are out
/// of scope for the editor.
pub struct TextBuffer {
    lines: Vec<String>,
    pub row: usize,
    pub col: usize,
}

impl TextBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            row: 0,
            col: 0,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    /// Byte offset of the cursor column within the current line.
    fn byte_col(&self) -> usize {
        self.lines[self.row]
            .char_indices()
            .nth(self.col)
            .map(|(i, _)| i)
            .unwrap_or(self.lines[self.row].len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_col();
        self.lines[self.row].insert(at, c);
        self.col += 1;
    }

    /// Tab behavior is indent: insert spaces up to the next 4-column stop.
    pub fn insert_tab(&mut self) {
        let n = 4 - (self.col % 4);
        for _ in 0..n {
            self.insert_char(' ');
        }
    }

    pub fn insert_newline(&mut self) {
        let at = self.byte_col();
        let rest = self.lines[self.row].split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let at = self.byte_col();
            self.lines[self.row].remove(at);
        } else if self.row > 0 {
            // Join with the previous line
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&line);
        }
    }

    pub fn delete(&mut self) {
        if self.col < self.line_len(self.row) {
            let at = self.byte_col();
            self.lines[self.row].remove(at);
        } else if self.row + 1 < self.lines.len() {
            let line = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&line);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.line_len(self.row);
    }

    pub fn page_up(&mut self, page: usize) {
        self.row = self.row.saturating_sub(page);
        self.col = self.col.min(self.line_len(self.row));
    }

    pub fn page_down(&mut self, page: usize) {
        self.row = (self.row + page).min(self.lines.len() - 1);
        self.col = self.col.min(self.line_len(self.row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_text_round_trip() {
        let mut buf = TextBuffer::from_text("");
        for c in "x = 1".chars() {
            buf.insert_char(c);
        }
        buf.insert_newline();
        for c in "print(x)".chars() {
            buf.insert_char(c);
        }
        assert_eq!(buf.text(), "x = 1\nprint(x)");
        assert_eq!(buf.line_count(), 2);
    }

    #[test]
    fn backspace_joins_lines() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        buf.row = 1;
        buf.col = 0;
        buf.backspace();
        assert_eq!(buf.text(), "abcd");
        assert_eq!((buf.row, buf.col), (0, 2));
    }

    #[test]
    fn delete_at_end_of_line_joins_next() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        buf.col = 2;
        buf.delete();
        assert_eq!(buf.text(), "abcd");
    }

    #[test]
    fn vertical_movement_clamps_column() {
        let mut buf = TextBuffer::from_text("a long line\nx");
        buf.col = 8;
        buf.move_down();
        assert_eq!((buf.row, buf.col), (1, 1));
        buf.move_up();
        assert_eq!((buf.row, buf.col), (0, 1));
    }

    #[test]
    fn tab_advances_to_next_stop() {
        let mut buf = TextBuffer::from_text("ab");
        buf.col = 2;
        buf.insert_tab();
        assert_eq!(buf.text(), "ab  ");
        assert_eq!(buf.col, 4);
    }

    #[test]
    fn cursor_survives_multibyte_chars() {
        let mut buf = TextBuffer::from_text("héllo");
        buf.col = 2;
        buf.insert_char('x');
        assert_eq!(buf.text(), "héxllo");
    }
}
