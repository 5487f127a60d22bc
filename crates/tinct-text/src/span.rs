//! A run of text sharing one set of attributes.

use tinct_style::Attributes;

use crate::width::{display_width, find_cell_boundary, grapheme_byte_offset, grapheme_count};

/// Text with a single set of [`Attributes`].
///
/// Positions are measured in grapheme clusters ("characters") or in display
/// cells; no operation ever produces a boundary inside a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextSpan {
    /// The text content.
    pub text: String,
    /// Attributes applied to the whole span.
    pub attributes: Attributes,
}

impl TextSpan {
    /// Create a span with the given attributes.
    #[must_use]
    pub fn new(text: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    /// Create an unstyled span.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, Attributes::default())
    }

    /// Text content.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        grapheme_count(&self.text)
    }

    /// True if the span has no text.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Display width in cells.
    #[must_use]
    pub fn display_width(&self) -> usize {
        display_width(&self.text)
    }

    /// Split after `index` grapheme clusters.
    ///
    /// The index is clamped to `[0, len]`; both halves keep the attributes.
    #[must_use]
    pub fn split(&self, index: usize) -> (TextSpan, TextSpan) {
        let at = grapheme_byte_offset(&self.text, index);
        self.split_at_byte(at)
    }

    /// Split so the left half is at most `width` cells wide.
    ///
    /// With `last_column_guard`, a double-width cluster that would exactly
    /// fill the last two columns goes to the right half instead, leaving the
    /// final column empty. See [`find_cell_boundary`] for the rule.
    #[must_use]
    pub fn split_by_display_width(
        &self,
        width: usize,
        last_column_guard: bool,
    ) -> (TextSpan, TextSpan) {
        let (at, _) = find_cell_boundary(&self.text, width, last_column_guard);
        self.split_at_byte(at)
    }

    fn split_at_byte(&self, at: usize) -> (TextSpan, TextSpan) {
        let (left, right) = self.text.split_at(at);
        (
            Self::new(left, self.attributes),
            Self::new(right, self.attributes),
        )
    }
}

impl From<&str> for TextSpan {
    fn from(text: &str) -> Self {
        Self::raw(text)
    }
}

impl From<String> for TextSpan {
    fn from(text: String) -> Self {
        Self::raw(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_style::Ansi16;

    #[test]
    fn length_counts_clusters() {
        let span = TextSpan::raw("e\u{301}日a");
        assert_eq!(span.len(), 3);
        assert_eq!(span.display_width(), 4);
        assert!(!span.is_empty());
        assert!(TextSpan::default().is_empty());
    }

    #[test]
    fn split_keeps_attributes() {
        let attrs = Attributes::new().fg(Ansi16::Red);
        let (left, right) = TextSpan::new("hello", attrs).split(2);
        assert_eq!(left, TextSpan::new("he", attrs));
        assert_eq!(right, TextSpan::new("llo", attrs));
    }

    #[test]
    fn split_clamps_out_of_range() {
        let span = TextSpan::raw("abc");
        let (left, right) = span.split(99);
        assert_eq!(left.text, "abc");
        assert!(right.is_empty());
        let (left, right) = span.split(0);
        assert!(left.is_empty());
        assert_eq!(right.text, "abc");
    }

    #[test]
    fn split_never_divides_cluster() {
        let (left, right) = TextSpan::raw("ae\u{301}b").split(2);
        assert_eq!(left.text, "ae\u{301}");
        assert_eq!(right.text, "b");
    }

    #[test]
    fn split_by_width_stops_before_overflow() {
        let (left, right) = TextSpan::raw("ab日c").split_by_display_width(3, false);
        assert_eq!(left.text, "ab");
        assert_eq!(right.text, "日c");
    }

    #[test]
    fn split_by_width_guard() {
        let span = TextSpan::raw("a日");
        assert_eq!(span.split_by_display_width(3, false).0.text, "a日");
        assert_eq!(span.split_by_display_width(3, true).0.text, "a");
    }

    #[test]
    fn zwj_family_stays_whole() {
        let family = "👨\u{200d}👩\u{200d}👧";
        let span = TextSpan::raw(family);
        let w = span.display_width();
        for cut in 0..w {
            let (left, right) = span.split_by_display_width(cut, false);
            assert!(left.text.is_empty() || right.text.is_empty());
            assert_eq!(format!("{}{}", left.text, right.text), family);
        }
    }
}
