//! Document buffer: the ordered row sequence, dirty tracking and file IO.
//!
//! Invariants:
//! * Row insertion accepts `0 <= at <= rows.len()`; deletion and row-level
//!   edits accept `0 <= at < rows.len()`. Anything else is a silent no-op
//!   reported through a `false` return, never a panic.
//! * `dirty` increments on every content mutation and resets to zero only on
//!   a successful load or save.

use crate::encoding::{TextEncoding, decode, encode};
use crate::line_ending::{LineEnding, split_lines};
use core_text::Row;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("can't open {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("can't save {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("can't save {}: {ch:?} has no Latin-1 encoding", path.display())]
    Unencodable { path: PathBuf, ch: char },
    #[error("no file name")]
    NoFilename,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    rows: Vec<Row>,
    dirty: u64,
    filename: Option<PathBuf>,
    line_ending: LineEnding,
    encoding: TextEncoding,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a clean, unnamed document from in-memory text.
    pub fn from_text(text: &str) -> Self {
        let split = split_lines(text);
        Self {
            rows: split.lines.into_iter().map(Row::new).collect(),
            dirty: 0,
            filename: None,
            line_ending: split.original,
            encoding: TextEncoding::Utf8,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stored length of row `at`; the virtual row past the end has length 0.
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map(Row::len).unwrap_or(0)
    }

    pub fn dirty_count(&self) -> u64 {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn insert_row(&mut self, at: usize, text: impl Into<String>) -> bool {
        if at > self.rows.len() {
            return false;
        }
        self.rows.insert(at, Row::new(text));
        self.dirty += 1;
        true
    }

    pub fn delete_row(&mut self, at: usize) -> bool {
        if at >= self.rows.len() {
            return false;
        }
        self.rows.remove(at);
        self.dirty += 1;
        true
    }

    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> bool {
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        r.insert_char(col, ch);
        self.dirty += 1;
        true
    }

    pub fn delete_char(&mut self, row: usize, col: usize) -> bool {
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        if !r.delete_char(col) {
            return false;
        }
        self.dirty += 1;
        true
    }

    pub fn append_to_row(&mut self, row: usize, text: &str) -> bool {
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        r.append_str(text);
        self.dirty += 1;
        true
    }

    /// Split row `row` at `col`: the prefix stays, the suffix becomes a new
    /// row directly below.
    pub fn split_row(&mut self, row: usize, col: usize) -> bool {
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        let tail = r.split_off(col);
        self.rows.insert(row + 1, Row::new(tail));
        self.dirty += 1;
        true
    }

    /// Join row `row` onto the end of the row above and remove it.
    pub fn merge_into_previous(&mut self, row: usize) -> bool {
        if row == 0 || row >= self.rows.len() {
            return false;
        }
        let removed = self.rows.remove(row);
        self.rows[row - 1].append_str(removed.chars());
        self.dirty += 1;
        true
    }

    /// Replace the contents with the file at `path`.
    ///
    /// Any byte content loads: invalid UTF-8 is read as Latin-1 and written
    /// back the same way. A missing file still becomes the file name so a
    /// later save creates it; any other read failure leaves the name alone
    /// so a save cannot overwrite a file that was never shown. On failure
    /// the buffer is left empty.
    pub fn load(&mut self, path: &Path) -> Result<usize, DocumentError> {
        self.dirty = 0;
        match std::fs::read(path) {
            Ok(bytes) => {
                let size_bytes = bytes.len();
                let (content, encoding) = decode(bytes);
                let split = split_lines(&content);
                if split.mixed {
                    tracing::warn!(target: "io", file=%path.display(), "mixed_line_endings_detected");
                }
                if encoding != TextEncoding::Utf8 {
                    tracing::warn!(target: "io", file=%path.display(), ?encoding, "non_utf8_content");
                }
                self.rows = split.lines.into_iter().map(Row::new).collect();
                self.line_ending = split.original;
                self.encoding = encoding;
                self.filename = Some(path.to_path_buf());
                tracing::debug!(target: "io", file=%path.display(), size_bytes, line_count = self.rows.len(), "file_read_ok");
                Ok(self.rows.len())
            }
            Err(source) => {
                self.rows.clear();
                self.line_ending = LineEnding::default();
                self.encoding = TextEncoding::default();
                self.filename = match source.kind() {
                    std::io::ErrorKind::NotFound => Some(path.to_path_buf()),
                    _ => None,
                };
                tracing::error!(target: "io", file=%path.display(), ?source, "file_open_error");
                Err(DocumentError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Stored text of every row, each followed by the document's terminator.
    pub fn contents(&self) -> String {
        let ending = self.line_ending.as_str();
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(row.chars());
            out.push_str(ending);
        }
        out
    }

    /// Write to the current file name. Returns the number of lines written.
    pub fn save(&mut self) -> Result<usize, DocumentError> {
        let path = self.filename.clone().ok_or(DocumentError::NoFilename)?;
        self.write_to(&path)
    }

    /// Save to `path` and adopt it as the file name once the write succeeded.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<usize, DocumentError> {
        let path = path.into();
        let lines = self.write_to(&path)?;
        self.filename = Some(path);
        Ok(lines)
    }

    fn write_to(&mut self, path: &Path) -> Result<usize, DocumentError> {
        let content = self.contents();
        let bytes = encode(&content, self.encoding).map_err(|ch| {
            tracing::error!(target: "io", file=%path.display(), ?ch, "file_encode_error");
            DocumentError::Unencodable {
                path: path.to_path_buf(),
                ch,
            }
        })?;
        match std::fs::write(path, &bytes) {
            Ok(()) => {
                self.dirty = 0;
                tracing::debug!(target: "io", file=%path.display(), size_bytes = bytes.len(), line_count = self.rows.len(), "file_write_ok");
                Ok(self.rows.len())
            }
            Err(source) => {
                tracing::error!(target: "io", file=%path.display(), ?source, "file_write_error");
                Err(DocumentError::Write {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_row_bounds() {
        let mut doc = Document::new();
        assert!(!doc.insert_row(1, "x"), "past end is rejected");
        assert_eq!(doc.dirty_count(), 0);
        assert!(doc.insert_row(0, "b"));
        assert!(doc.insert_row(0, "a"));
        assert!(doc.insert_row(2, "c"));
        let texts: Vec<_> = doc.rows().iter().map(|r| r.chars()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(doc.dirty_count(), 3);
    }

    #[test]
    fn delete_row_bounds() {
        let mut doc = Document::from_text("a\nb\n");
        assert!(!doc.delete_row(2));
        assert!(!doc.is_dirty());
        assert!(doc.delete_row(0));
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.row(0).unwrap().chars(), "b");
        assert!(doc.is_dirty());
    }

    #[test]
    fn row_edits_out_of_range_are_noops() {
        let mut doc = Document::from_text("ab\n");
        assert!(!doc.insert_char(1, 0, 'x'));
        assert!(!doc.delete_char(0, 5));
        assert!(!doc.append_to_row(3, "x"));
        assert!(!doc.split_row(1, 0));
        assert!(!doc.merge_into_previous(0));
        assert_eq!(doc.dirty_count(), 0);
    }

    #[test]
    fn split_and_merge() {
        let mut doc = Document::from_text("hello world\n");
        assert!(doc.split_row(0, 5));
        assert_eq!(doc.row(0).unwrap().chars(), "hello");
        assert_eq!(doc.row(1).unwrap().chars(), " world");
        assert!(doc.merge_into_previous(1));
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.row(0).unwrap().chars(), "hello world");
        assert_eq!(doc.dirty_count(), 2);
    }

    #[test]
    fn row_len_of_virtual_row_is_zero() {
        let doc = Document::from_text("abc\n");
        assert_eq!(doc.row_len(0), 3);
        assert_eq!(doc.row_len(1), 0);
    }

    #[test]
    fn save_without_name_fails_and_keeps_dirty() {
        let mut doc = Document::new();
        doc.insert_row(0, "x");
        let err = doc.save().unwrap_err();
        assert!(matches!(err, DocumentError::NoFilename));
        assert!(doc.is_dirty());
    }

    #[test]
    fn contents_uses_detected_terminator() {
        let doc = Document::from_text("a\r\nb\r\n");
        assert_eq!(doc.line_ending(), LineEnding::Crlf);
        assert_eq!(doc.contents(), "a\r\nb\r\n");
    }
}
