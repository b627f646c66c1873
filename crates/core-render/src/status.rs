//! Status bar and message bar composition.
//!
//! Status bar layout: `<name:.20> - <n> lines[ (modified)]` on the left and
//! `<row+1>/<n>` flush right. The result is always exactly `width`
//! characters: the left part is truncated first and the right part is only
//! shown when it fits after it.

use std::path::Path;

/// What the status bar needs to know about the session.
pub struct StatusContext<'a> {
    pub file_name: Option<&'a Path>,
    pub line_count: usize,
    /// 0-based cursor row; may equal `line_count` on the virtual row.
    pub cursor_row: usize,
    pub dirty: bool,
}

const NAME_WIDTH: usize = 20;

pub fn build_status(ctx: &StatusContext<'_>, width: usize) -> String {
    let name = ctx
        .file_name
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "[No Name]".to_string());
    let name: String = name.chars().take(NAME_WIDTH).collect();
    let left = format!(
        "{} - {} lines{}",
        name,
        ctx.line_count,
        if ctx.dirty { " (modified)" } else { "" }
    );
    let right = format!("{}/{}", ctx.cursor_row + 1, ctx.line_count);

    let mut out: String = left.chars().take(width).collect();
    let mut len = out.chars().count();
    let right_len = right.chars().count();
    while len < width {
        if width - len == right_len {
            out.push_str(&right);
            break;
        }
        out.push(' ');
        len += 1;
    }
    out
}

/// Message bar text clipped to `width` characters.
pub fn build_message(message: Option<&str>, width: usize) -> String {
    message
        .map(|m| m.chars().take(width).collect())
        .unwrap_or_default()
}
