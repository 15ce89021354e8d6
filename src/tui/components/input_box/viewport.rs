//! Horizontal scrolling for the single-line prompt field.
//!
//! The prompt never wraps; when it is wider than the field, the view
//! slides so the cursor stays visible. Widths are terminal columns
//! (via `unicode-width`), not bytes or chars.

use unicode_width::UnicodeWidthChar;

/// What part of the buffer is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct View<'a> {
    pub text: &'a str,
    /// Cursor column relative to the start of `text`
    pub cursor_col: u16,
}

/// Column width of `text`.
pub(super) fn width_of(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Scroll `offset` (a byte offset into `buffer`) so that `cursor` fits in
/// `width` columns, then return the visible slice.
///
/// The cursor needs one spare column at the end of the line.
pub(super) fn scroll<'a>(buffer: &'a str, cursor: usize, offset: &mut usize, width: u16) -> View<'a> {
    let width = width as usize;
    if width == 0 {
        return View { text: "", cursor_col: 0 };
    }

    if cursor < *offset {
        *offset = cursor;
    }

    // Slide right until the text between offset and cursor leaves room for the cursor
    while width_of(&buffer[*offset..cursor]) >= width {
        match buffer[*offset..].chars().next() {
            Some(c) => *offset += c.len_utf8(),
            None => break,
        }
    }

    let mut used = 0;
    let mut end = *offset;
    for c in buffer[*offset..].chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        end += c.len_utf8();
    }

    View {
        text: &buffer[*offset..end],
        cursor_col: width_of(&buffer[*offset..cursor]) as u16,
    }
}
