//! Line terminator detection and splitting.
//!
//! Rows never store the detected terminator. On load the file's style is
//! detected so that save can write the same style back and LF, CRLF and CR
//! files survive a load/save round trip unchanged.

/// Line ending style detected from a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Cr,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Result of splitting file content into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitText {
    pub lines: Vec<String>,
    /// Terminator style written back on save.
    pub original: LineEnding,
    /// True if terminators other than the detected style were seen.
    pub mixed: bool,
}

/// Split `input` into lines. A terminator at the very end does not produce
/// an extra empty line; empty input produces no lines.
///
/// Style detection:
/// * Content with no `\n` at all but some `\r` is a CR file and splits on
///   `\r`.
/// * Otherwise the majority of `\r\n` versus bare `\n` wins, ties going to
///   LF. A CRLF file splits on `\r\n` and on bare `\n`.
/// * An LF file splits on `\n` only. Any `\r` stays in the row, so LF
///   content round-trips byte for byte.
pub fn split_lines(input: &str) -> SplitText {
    let bytes = input.as_bytes();
    let mut crlf = 0usize;
    let mut lf = 0usize;
    let mut cr = 0usize;
    for (i, b) in bytes.iter().enumerate() {
        match b {
            b'\n' if i > 0 && bytes[i - 1] == b'\r' => crlf += 1,
            b'\n' => lf += 1,
            b'\r' if bytes.get(i + 1) != Some(&b'\n') => cr += 1,
            _ => {}
        }
    }

    let (original, mixed) = if crlf + lf == 0 && cr > 0 {
        (LineEnding::Cr, false)
    } else if crlf > lf {
        (LineEnding::Crlf, lf > 0)
    } else {
        (LineEnding::Lf, crlf > 0)
    };

    let mut lines = Vec::new();
    let mut seg_start = 0usize;
    let mut i = 0usize;
    // Only slice at ASCII terminator bytes so UTF-8 sequences stay intact.
    while i < bytes.len() {
        let term_len = match (original, bytes[i]) {
            (LineEnding::Cr, b'\r') | (LineEnding::Lf, b'\n') => 1,
            (LineEnding::Crlf, b'\r') if bytes.get(i + 1) == Some(&b'\n') => 2,
            (LineEnding::Crlf, b'\n') => 1,
            _ => 0,
        };
        if term_len == 0 {
            i += 1;
            continue;
        }
        lines.push(input[seg_start..i].to_string());
        i += term_len;
        seg_start = i;
    }
    if seg_start < input.len() {
        lines.push(input[seg_start..].to_string());
    }

    SplitText {
        lines,
        original,
        mixed,
    }
}
