#![forbid(unsafe_code)]

//! Lossless ANSI/VT tokenizer and encoder.
//!
//! - [`Token`] - one lexical unit: text, SGR, cursor move, erase, OSC, or an
//!   opaque escape kept verbatim
//! - [`tokenize`] - single-pass, never-failing tokenizer
//! - [`encode`] - exact inverse of [`tokenize`]
//!
//! # Example
//! ```
//! use tinct_ansi::{encode, tokenize, Token};
//!
//! let input = "\x1b[31mred\x1b[0m \x1b[2K\x1b]0;title\x07";
//! let tokens = tokenize(input);
//! assert_eq!(tokens[0], Token::Sgr(vec![31]));
//! assert_eq!(encode(&tokens), input);
//! ```

pub mod token;
pub mod tokenizer;

pub use token::{
    BEL, CursorDirection, ESC, EraseTarget, OscTerminator, Token, encode, plain_text,
};
pub use tokenizer::tokenize;
