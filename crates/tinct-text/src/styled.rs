//! Ordered sequences of styled spans.

use tinct_style::Attributes;

use crate::span::TextSpan;
use crate::width::display_width;

/// Styled text: spans in render order.
///
/// The concatenated span texts are the plain-text content. Structural
/// operations only ever split the one span that straddles a boundary;
/// spans wholly on one side pass through unchanged.
///
/// # Example
/// ```
/// use tinct_style::{Ansi16, Attributes};
/// use tinct_text::{StyledText, TextSpan};
///
/// let text = StyledText::from_spans([
///     TextSpan::raw("Status: "),
///     TextSpan::new("OK", Attributes::new().bold().fg(Ansi16::Green)),
/// ]);
/// assert_eq!(text.plain_text(), "Status: OK");
///
/// let (left, right) = text.split_by_display_width(9, false);
/// assert_eq!(left.plain_text(), "Status: O");
/// assert_eq!(right.plain_text(), "K");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyledText {
    spans: Vec<TextSpan>,
}

impl StyledText {
    /// Create empty styled text.
    #[must_use]
    pub const fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Create from a single unstyled string.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::from_spans([TextSpan::raw(text)])
    }

    /// Create from a single string with attributes.
    #[must_use]
    pub fn styled(text: impl Into<String>, attributes: Attributes) -> Self {
        Self::from_spans([TextSpan::new(text, attributes)])
    }

    /// Create from spans.
    #[must_use]
    pub fn from_spans(spans: impl IntoIterator<Item = TextSpan>) -> Self {
        Self {
            spans: spans.into_iter().collect(),
        }
    }

    /// Append a span.
    pub fn push(&mut self, span: TextSpan) {
        self.spans.push(span);
    }

    /// Append a span (builder form).
    #[must_use]
    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.push(span);
        self
    }

    /// The spans, in render order.
    #[inline]
    #[must_use]
    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// Consume into the span list.
    #[must_use]
    pub fn into_spans(self) -> Vec<TextSpan> {
        self.spans
    }

    /// Concatenated text of all spans.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(TextSpan::as_str).collect()
    }

    /// Number of grapheme clusters across all spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.iter().map(TextSpan::len).sum()
    }

    /// True when no span has any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(TextSpan::is_empty)
    }

    /// Display width in cells.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.spans.iter().map(TextSpan::display_width).sum()
    }

    /// Fill unset attributes of every span from `base`.
    pub fn apply_base_style(&mut self, base: Attributes) {
        for span in &mut self.spans {
            span.attributes = span.attributes.merge(&base);
        }
    }

    /// Coalesce consecutive spans with equal attributes.
    ///
    /// Rendered output is unchanged; empty spans are dropped.
    #[must_use]
    pub fn merging_adjacent_spans(&self) -> Self {
        let mut merged: Vec<TextSpan> = Vec::with_capacity(self.spans.len());
        for span in &self.spans {
            if span.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.attributes == span.attributes => last.text.push_str(&span.text),
                _ => merged.push(span.clone()),
            }
        }
        Self { spans: merged }
    }

    /// Split after `index` grapheme clusters (clamped to `[0, len]`).
    #[must_use]
    pub fn split(&self, index: usize) -> (Self, Self) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut seen = 0;
        for span in &self.spans {
            let len = span.len();
            if seen + len <= index {
                left.push(span.clone());
            } else if seen >= index {
                right.push(span.clone());
            } else {
                let (l, r) = span.split(index - seen);
                left.push(l);
                right.push(r);
            }
            seen += len;
        }
        (Self { spans: left }, Self { spans: right })
    }

    /// Split so the left half is at most `width` cells wide.
    ///
    /// See [`TextSpan::split_by_display_width`] for `last_column_guard`.
    #[must_use]
    pub fn split_by_display_width(&self, width: usize, last_column_guard: bool) -> (Self, Self) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut used = 0;
        let mut cut = false;
        for span in &self.spans {
            if cut {
                right.push(span.clone());
                continue;
            }
            let (l, r) = span.split_by_display_width(width - used, last_column_guard);
            if r.is_empty() {
                used += l.display_width();
                left.push(l);
            } else {
                if !l.is_empty() {
                    left.push(l);
                }
                right.push(r);
                cut = true;
            }
        }
        (Self { spans: left }, Self { spans: right })
    }

    /// The cells `[start, end)`.
    ///
    /// A double-width cluster straddling `start` is included; the result is
    /// never wider than `end - start`.
    #[must_use]
    pub fn slice_by_display_columns(&self, start: usize, end: usize) -> Self {
        if end <= start {
            return Self::new();
        }
        let (_, rest) = self.split_by_display_width(start, false);
        let (slice, _) = rest.split_by_display_width(end - start, false);
        slice
    }

    /// Break into lines of at most `width` cells.
    ///
    /// Empty text yields one empty line and a zero width yields none. A
    /// cluster wider than `width` cannot be placed; it and everything after
    /// it become the final line.
    #[must_use]
    pub fn wrap_by_display_width(&self, width: usize) -> Vec<Self> {
        if width == 0 {
            return Vec::new();
        }
        if self.is_empty() {
            return vec![Self::new()];
        }

        let mut lines = Vec::new();
        let mut rest = self.clone();
        while !rest.is_empty() {
            let (line, remainder) = rest.split_by_display_width(width, false);
            if line.is_empty() {
                tracing::debug!(width, "wrap made no progress; keeping remainder on one line");
                lines.push(rest);
                break;
            }
            lines.push(line);
            rest = remainder;
        }
        lines
    }

    /// Truncate to `max_width` cells, appending `ellipsis` when text is cut.
    ///
    /// The ellipsis takes the attributes of the last kept span. If it does
    /// not fit, the text is truncated without it.
    #[must_use]
    pub fn truncated(&self, max_width: usize, ellipsis: Option<&str>) -> Self {
        if self.display_width() <= max_width {
            return self.clone();
        }

        let ellipsis = ellipsis.filter(|e| display_width(e) < max_width);
        let content_width = max_width - ellipsis.map_or(0, display_width);
        let (mut kept, _) = self.split_by_display_width(content_width, false);
        if let Some(e) = ellipsis {
            let attributes = kept
                .spans
                .last()
                .map(|span| span.attributes)
                .unwrap_or_default();
            kept.push(TextSpan::new(e, attributes));
        }
        kept
    }
}

impl From<TextSpan> for StyledText {
    fn from(span: TextSpan) -> Self {
        Self::from_spans([span])
    }
}

impl FromIterator<TextSpan> for StyledText {
    fn from_iter<I: IntoIterator<Item = TextSpan>>(iter: I) -> Self {
        Self::from_spans(iter)
    }
}
