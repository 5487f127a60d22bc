#![forbid(unsafe_code)]

//! Tinct public facade crate.
//!
//! Re-exports the tokenizer, the style engine and the styled-text layer,
//! and offers a prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use tinct::prelude::*;
//!
//! let profile: TerminalProfile = "256".parse().unwrap();
//! let text = parse_styled("\x1b[38;2;255;0;0mhot\x1b[0m cold");
//! assert_eq!(render_styled(&text, profile), "\x1b[38;5;196mhot cold\x1b[0m");
//! assert_eq!(
//!     render_styled_isolated(&text, profile),
//!     "\x1b[38;5;196mhot\x1b[0m cold\x1b[0m"
//! );
//!
//! let lines = wrap_to_width("\x1b[1mbold words here\x1b[0m", 5);
//! assert_eq!(lines[0], "\x1b[1mbold \x1b[0m");
//! ```

// --- Token re-exports ------------------------------------------------------

pub use tinct_ansi::{
    CursorDirection, EraseTarget, OscTerminator, Token, encode, plain_text, tokenize,
};

// --- Style re-exports ------------------------------------------------------

pub use tinct_style::{
    Ansi16, Attributes, CacheStats, Color, DetectInputs, ParamCache, ParseProfileError, Rgb,
    StyleFlags, StyleState, TerminalProfile, apply_params, downsample, to_params,
};

// --- Text re-exports -------------------------------------------------------

pub use tinct_text::{
    StyledRenderer, StyledText, TextSpan, display_width, display_width_ignoring_ansi,
    parse_styled, render_styled, render_styled_isolated, split_visible_columns, strip_ansi,
    styled_text_to_isolated_tokens, styled_text_to_tokens, styled_text_to_tokens_with_profile,
    tokens_to_styled_text, truncate_to_display_width, truncate_visible_columns, wrap_to_width,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Ansi16, Attributes, Color, StyledRenderer, StyledText, TerminalProfile, TextSpan, Token,
        display_width_ignoring_ansi, encode, parse_styled, render_styled, render_styled_isolated,
        split_visible_columns, strip_ansi, tokenize, truncate_visible_columns, wrap_to_width,
    };

    pub use crate::{ansi, style, text};
}

pub use tinct_ansi as ansi;
pub use tinct_style as style;
pub use tinct_text as text;
