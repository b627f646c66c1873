//! Row storage: one line of text plus its display form.
//!
//! A `Row` keeps the literal stored text (`chars`) next to a `render` string in
//! which every tab is expanded with spaces up to the next multiple of
//! [`TAB_STOP`]. The cached `render_len` always equals the character count of
//! `render`: every mutation goes through `Row::update`, which rebuilds both
//! together, so no caller can observe a row whose two forms disagree.
//!
//! Columns are character indices into `chars`. The editor treats each
//! character as one screen column (wide glyphs are not measured), which keeps
//! cursor math trivial while still accepting any UTF-8 input without slicing
//! inside a code point.

/// Width of a tab stop in render columns.
pub const TAB_STOP: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    chars: String,
    render: String,
    render_len: usize,
}

impl Row {
    pub fn new(text: impl Into<String>) -> Self {
        let mut row = Self {
            chars: text.into(),
            render: String::new(),
            render_len: 0,
        };
        row.update();
        row
    }

    /// Stored text, exactly as it is written back to disk.
    pub fn chars(&self) -> &str {
        &self.chars
    }

    /// Tab-expanded display text.
    pub fn render(&self) -> &str {
        &self.render
    }

    pub fn render_len(&self) -> usize {
        self.render_len
    }

    /// Number of stored characters (the maximum cursor column on this row).
    pub fn len(&self) -> usize {
        self.chars.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Insert `ch` before column `at`. Columns past the end append.
    pub fn insert_char(&mut self, at: usize, ch: char) {
        let at = at.min(self.len());
        let byte = self.byte_index(at);
        self.chars.insert(byte, ch);
        self.update();
    }

    /// Remove the character at column `at`. Returns false (no-op) when `at`
    /// does not address a stored character.
    pub fn delete_char(&mut self, at: usize) -> bool {
        if at >= self.len() {
            return false;
        }
        let byte = self.byte_index(at);
        self.chars.remove(byte);
        self.update();
        true
    }

    /// Append text to the end of the row (used when merging rows).
    pub fn append_str(&mut self, s: &str) {
        self.chars.push_str(s);
        self.update();
    }

    /// Cut the row at column `at`, keeping the prefix and returning the
    /// suffix. Columns past the end return an empty string.
    pub fn split_off(&mut self, at: usize) -> String {
        let at = at.min(self.len());
        let byte = self.byte_index(at);
        let tail = self.chars.split_off(byte);
        self.update();
        tail
    }

    /// Map a stored-text column to its render column.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        let mut rx = 0usize;
        for ch in self.chars.chars().take(cx) {
            if ch == '\t' {
                rx += (TAB_STOP - 1) - (rx % TAB_STOP);
            }
            rx += 1;
        }
        rx
    }

    /// Map a render column back to the stored-text column that covers it.
    /// Render columns inside an expanded tab resolve to the tab itself.
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur_rx = 0usize;
        for (cx, ch) in self.chars.chars().enumerate() {
            if ch == '\t' {
                cur_rx += (TAB_STOP - 1) - (cur_rx % TAB_STOP);
            }
            cur_rx += 1;
            if cur_rx > rx {
                return cx;
            }
        }
        self.len()
    }

    fn byte_index(&self, col: usize) -> usize {
        self.chars
            .char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(self.chars.len())
    }

    fn update(&mut self) {
        self.render = expand_tabs(&self.chars);
        self.render_len = self.render.chars().count();
    }
}

/// Expand every tab in `text` to spaces reaching the next tab stop. Other
/// control characters (a stray `\r` in an LF file, say) render as `?` so
/// they never reach the terminal.
pub fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut col = 0usize;
    for ch in text.chars() {
        if ch == '\t' {
            out.push(' ');
            col += 1;
            while col % TAB_STOP != 0 {
                out.push(' ');
                col += 1;
            }
        } else {
            out.push(if ch.is_control() { '?' } else { ch });
            col += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_expands_to_next_stop() {
        let row = Row::new("a\tb");
        assert_eq!(row.render(), "a       b");
        assert_eq!(row.render_len(), 9);
        let lead = Row::new("\tx");
        assert_eq!(lead.render_len(), TAB_STOP + 1);
    }

    #[test]
    fn insert_and_delete_keep_render_in_sync() {
        let mut row = Row::new("ac");
        row.insert_char(1, 'b');
        assert_eq!(row.chars(), "abc");
        row.insert_char(0, '\t');
        assert_eq!(row.render(), "        abc");
        assert_eq!(row.render_len(), 11);
        assert!(row.delete_char(0));
        assert_eq!(row.render(), "abc");
        assert_eq!(row.render_len(), 3);
    }

    #[test]
    fn insert_past_end_appends() {
        let mut row = Row::new("ab");
        row.insert_char(99, 'c');
        assert_eq!(row.chars(), "abc");
    }

    #[test]
    fn delete_out_of_range_is_noop() {
        let mut row = Row::new("ab");
        assert!(!row.delete_char(2));
        assert_eq!(row.chars(), "ab");
    }

    #[test]
    fn split_off_keeps_prefix() {
        let mut row = Row::new("hello world");
        let tail = row.split_off(5);
        assert_eq!(row.chars(), "hello");
        assert_eq!(tail, " world");
        assert_eq!(row.render_len(), 5);
    }

    #[test]
    fn cx_rx_mapping_across_tabs() {
        let row = Row::new("\tab\tc");
        assert_eq!(row.cx_to_rx(0), 0);
        assert_eq!(row.cx_to_rx(1), 8);
        assert_eq!(row.cx_to_rx(3), 10);
        assert_eq!(row.cx_to_rx(4), 16);
        assert_eq!(row.rx_to_cx(8), 1);
        assert_eq!(row.rx_to_cx(3), 0, "inside the tab maps to the tab");
        assert_eq!(row.rx_to_cx(16), 4);
        assert_eq!(row.rx_to_cx(100), row.len());
    }

    #[test]
    fn control_chars_render_as_placeholder() {
        let row = Row::new("a\rb\u{1b}");
        assert_eq!(row.chars(), "a\rb\u{1b}");
        assert_eq!(row.render(), "a?b?");
        assert_eq!(row.render_len(), 4);
    }

    #[test]
    fn non_ascii_columns_are_characters() {
        let mut row = Row::new("héllo");
        assert_eq!(row.len(), 5);
        row.insert_char(2, 'x');
        assert_eq!(row.chars(), "héxllo");
        assert!(row.delete_char(1));
        assert_eq!(row.chars(), "hxllo");
    }
}
