//! Byte-offset helpers for editing the prompt buffer.
//!
//! Every function takes and returns byte offsets that sit on `char`
//! boundaries, so the results can be used to slice or drain the buffer.

/// Offset of the char that ends at `pos`. Returns 0 at the start.
pub(super) fn prev_char(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map_or(0, |(i, _)| i)
}

/// Offset just past the char starting at `pos`. Returns `text.len()` at the end.
pub(super) fn next_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |c| pos + c.len_utf8())
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `pos`, skipping separators first (readline `backward-word`).
pub(super) fn prev_word(text: &str, pos: usize) -> usize {
    let mut start = pos;
    let mut seen_word = false;
    for (i, c) in text[..pos].char_indices().rev() {
        if is_word(c) {
            seen_word = true;
        } else if seen_word {
            break;
        }
        start = i;
    }
    start
}

/// End of the word after `pos`, skipping separators first (readline `forward-word`).
pub(super) fn next_word(text: &str, pos: usize) -> usize {
    let mut seen_word = false;
    for (i, c) in text[pos..].char_indices() {
        if is_word(c) {
            seen_word = true;
        } else if seen_word {
            return pos + i;
        }
    }
    text.len()
}
