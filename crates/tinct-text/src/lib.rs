#![forbid(unsafe_code)]

//! Styled text and ANSI-safe string surgery for tinct.
//!
//! This crate provides width-aware operations over styled terminal text:
//! - [`TextSpan`] - a run of text with one set of attributes
//! - [`StyledText`] - spans in render order, with split/merge/wrap/slice
//! - [`tokens_to_styled_text`] / [`styled_text_to_tokens`] - span conversion
//! - [`split_visible_columns`] / [`truncate_visible_columns`] /
//!   [`wrap_to_width`] - token-level line composition without style bleed
//! - [`truncate_to_display_width`] / [`display_width_ignoring_ansi`] -
//!   escape-transparent measurement and truncation
//!
//! # Example
//! ```
//! use tinct_style::{Ansi16, Attributes};
//! use tinct_text::{
//!     display_width_ignoring_ansi, parse_styled, split_visible_columns, StyledText, TextSpan,
//! };
//!
//! let text = parse_styled("\x1b[1;31mError:\x1b[0m ok");
//! assert_eq!(text.spans()[0].attributes, Attributes::new().bold().fg(Ansi16::Red));
//! assert_eq!(text.plain_text(), "Error: ok");
//!
//! let (left, right) = split_visible_columns("\x1b[31mHello World\x1b[0m", 5);
//! assert_eq!(left, "\x1b[31mHello");
//! assert_eq!(right, "\x1b[31mWorld\x1b[0m");
//!
//! assert_eq!(display_width_ignoring_ansi("\x1b[4m日本\x1b[0m"), 4);
//! ```

pub mod compose;
pub mod convert;
pub mod span;
pub mod styled;
pub mod truncate;
pub mod width;

pub use compose::{
    MAX_WRAP_ITERATIONS, split_tokens_at_column, split_visible_columns,
    truncate_visible_columns, wrap_to_width,
};
pub use convert::{
    StyledRenderer, parse_styled, render_styled, render_styled_isolated, strip_ansi,
    styled_text_to_isolated_tokens, styled_text_to_tokens, styled_text_to_tokens_with_profile,
    tokens_to_styled_text,
};
pub use span::TextSpan;
pub use styled::StyledText;
pub use truncate::{display_width_ignoring_ansi, truncate_to_display_width};
pub use width::{
    display_width, find_cell_boundary, grapheme_count, grapheme_width, has_wide_chars,
    truncate_to_width, truncate_with_ellipsis,
};
