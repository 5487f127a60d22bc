//! Display-width measurement over grapheme clusters.
//!
//! Widths come from `unicode-width` applied per extended grapheme cluster.
//! The width of a string is the sum of its cluster widths, so cutting at any
//! cluster boundary splits the width exactly.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a single grapheme cluster (0, 1 or 2 for typical text).
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    grapheme.width()
}

/// Calculate the display width of text in cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if is_printable_ascii(text) {
        return text.len();
    }
    text.graphemes(true).map(grapheme_width).sum()
}

/// Number of extended grapheme clusters in `text`.
#[must_use]
pub fn grapheme_count(text: &str) -> usize {
    if text.is_ascii() && !text.contains('\r') {
        return text.len();
    }
    text.graphemes(true).count()
}

/// Byte offset of the `index`-th grapheme cluster, clamped to `text.len()`.
#[must_use]
pub fn grapheme_byte_offset(text: &str, index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Find the byte offset where a prefix of `text` reaches at most `max_width`
/// cells.
///
/// Returns `(byte_offset, width_of_prefix)`. Clusters are never divided.
/// A double-width cluster starting on the last column never fits, with or
/// without the guard. With `last_column_guard`, a double-width cluster that
/// fits exactly, covering the last two columns, is refused as well; the cut
/// then leaves the final column empty, so a terminal that wraps a wide
/// glyph touching the right margin never shows half of it on the edge.
#[must_use]
pub fn find_cell_boundary(text: &str, max_width: usize, last_column_guard: bool) -> (usize, usize) {
    let mut width = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let w = grapheme_width(grapheme);
        if width + w > max_width || (last_column_guard && w == 2 && width + w == max_width) {
            return (offset, width);
        }
        width += w;
    }
    (text.len(), width)
}

/// Truncate text to fit within `max_width` cells (no ellipsis).
///
/// Respects grapheme boundaries.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let (end, _) = find_cell_boundary(text, max_width, false);
    text[..end].to_owned()
}

/// Truncate text to `max_width` cells, ending with `ellipsis` when cut.
///
/// If the ellipsis alone does not fit, the text is truncated without it.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_width: usize, ellipsis: &str) -> String {
    if display_width(text) <= max_width {
        return text.to_owned();
    }

    let ellipsis_width = display_width(ellipsis);
    if ellipsis_width >= max_width {
        return truncate_to_width(text, max_width);
    }

    let mut result = truncate_to_width(text, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Check if a string contains any wide characters (width > 1).
#[must_use]
pub fn has_wide_chars(text: &str) -> bool {
    text.graphemes(true).any(|g| grapheme_width(g) > 1)
}

fn is_printable_ascii(text: &str) -> bool {
    text.bytes().all(|b| (0x20..0x7f).contains(&b))
}
