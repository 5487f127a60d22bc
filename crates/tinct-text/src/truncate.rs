//! Width measurement and truncation that ignore escape sequences.

use tinct_ansi::{Token, tokenize};

use crate::convert::tokens_to_styled_text;
use crate::width::{find_cell_boundary, truncate_to_width};

/// Visible width of ANSI text: the width of its styled spans, with every
/// escape sequence ignored.
///
/// This is the measure of "visible width" used by every operation in this
/// crate.
#[must_use]
pub fn display_width_ignoring_ansi(input: &str) -> usize {
    tokens_to_styled_text(&tokenize(input)).display_width()
}

/// Truncate ANSI text to at most `max_width` visible columns.
///
/// Text is cut only between grapheme clusters. Escape sequences are kept
/// wherever they occur, including after the cut; text after the cut is
/// dropped. Unlike [`truncate_visible_columns`](crate::truncate_visible_columns)
/// no reset is added.
#[must_use]
pub fn truncate_to_display_width(input: &str, max_width: usize) -> String {
    if !input.contains('\x1b') {
        return truncate_to_width(input, max_width);
    }

    let mut out = String::with_capacity(input.len());
    let mut used = 0;
    let mut exhausted = false;
    for token in tokenize(input) {
        match token {
            Token::Text(text) => {
                if exhausted {
                    continue;
                }
                let (end, width) = find_cell_boundary(&text, max_width - used, false);
                out.push_str(&text[..end]);
                used += width;
                exhausted = end < text.len();
            }
            other => other.encode_into(&mut out),
        }
    }
    out
}
