//! Token model for ANSI/VT text streams.
//!
//! A [`Token`] is one lexical unit of a terminal byte stream: a run of
//! printable text, a recognized escape sequence with its decoded fields, or
//! an opaque escape sequence captured verbatim. Every token knows how to
//! re-emit itself, and the emitted form is exactly the input it came from.

use std::fmt::{self, Write as _};

/// The escape byte (`0x1B`) that introduces every sequence.
pub const ESC: char = '\x1b';

/// Bell (`0x07`), one of the two OSC terminators.
pub const BEL: char = '\x07';

/// Cursor-movement final bytes `A` through `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorDirection {
    /// CUU (`CSI n A`).
    Up,
    /// CUD (`CSI n B`).
    Down,
    /// CUF (`CSI n C`).
    Forward,
    /// CUB (`CSI n D`).
    Back,
    /// CNL (`CSI n E`).
    NextLine,
    /// CPL (`CSI n F`).
    PreviousLine,
    /// CHA (`CSI n G`).
    Column,
    /// CUP (`CSI n H`).
    Position,
}

impl CursorDirection {
    /// Final byte that selects this movement.
    #[must_use]
    pub const fn final_byte(self) -> u8 {
        match self {
            Self::Up => b'A',
            Self::Down => b'B',
            Self::Forward => b'C',
            Self::Back => b'D',
            Self::NextLine => b'E',
            Self::PreviousLine => b'F',
            Self::Column => b'G',
            Self::Position => b'H',
        }
    }

    /// Map a CSI final byte back to a movement, if it is one.
    #[must_use]
    pub const fn from_final_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::Up),
            b'B' => Some(Self::Down),
            b'C' => Some(Self::Forward),
            b'D' => Some(Self::Back),
            b'E' => Some(Self::NextLine),
            b'F' => Some(Self::PreviousLine),
            b'G' => Some(Self::Column),
            b'H' => Some(Self::Position),
            _ => None,
        }
    }
}

/// Which region an erase sequence clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EraseTarget {
    /// ED (`CSI n J`).
    Display,
    /// EL (`CSI n K`).
    Line,
}

impl EraseTarget {
    /// Final byte that selects this target.
    #[must_use]
    pub const fn final_byte(self) -> u8 {
        match self {
            Self::Display => b'J',
            Self::Line => b'K',
        }
    }

    /// Map a CSI final byte back to an erase target, if it is one.
    #[must_use]
    pub const fn from_final_byte(byte: u8) -> Option<Self> {
        match byte {
            b'J' => Some(Self::Display),
            b'K' => Some(Self::Line),
            _ => None,
        }
    }
}

/// How an OSC sequence was terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OscTerminator {
    /// `BEL` (`0x07`).
    #[default]
    Bel,
    /// String terminator `ESC \`.
    St,
}

impl OscTerminator {
    /// Wire form of the terminator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bel => "\x07",
            Self::St => "\x1b\\",
        }
    }
}

/// One lexical unit of an ANSI/VT stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Printable text containing no recognized escape sequence.
    Text(String),
    /// Select Graphic Rendition (`CSI p ; p m`). An empty list means reset.
    Sgr(Vec<u16>),
    /// Cursor movement. A count of 1 is written without a parameter.
    Cursor {
        count: u16,
        direction: CursorDirection,
    },
    /// Erase in display or line. Mode 0 is written without a parameter.
    Erase { mode: u16, target: EraseTarget },
    /// Operating System Command (`OSC command ; data terminator`).
    Osc {
        command: String,
        data: String,
        terminator: OscTerminator,
    },
    /// Any escape sequence kept verbatim, including malformed ones.
    Control(String),
}

impl Token {
    /// Create a text token.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// The canonical SGR reset token (`ESC[0m`).
    #[must_use]
    pub fn reset() -> Self {
        Self::Sgr(vec![0])
    }

    /// Whether this is a [`Token::Text`].
    #[inline]
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Text content, for text tokens.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this token is an SGR reset (`ESC[m` or `ESC[0m`).
    #[must_use]
    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Sgr(params) if params.is_empty() || params[..] == [0])
    }

    /// Write the wire form of this token.
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Control(text) => out.write_str(text),
            Self::Sgr(params) => {
                out.write_str("\x1b[")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        out.write_char(';')?;
                    }
                    write!(out, "{param}")?;
                }
                out.write_char('m')
            }
            Self::Cursor { count, direction } => {
                out.write_str("\x1b[")?;
                if *count != 1 {
                    write!(out, "{count}")?;
                }
                out.write_char(char::from(direction.final_byte()))
            }
            Self::Erase { mode, target } => {
                out.write_str("\x1b[")?;
                if *mode != 0 {
                    write!(out, "{mode}")?;
                }
                out.write_char(char::from(target.final_byte()))
            }
            Self::Osc {
                command,
                data,
                terminator,
            } => {
                write!(out, "\x1b]{command};{data}")?;
                out.write_str(terminator.as_str())
            }
        }
    }

    /// Append the wire form of this token to `out`.
    pub fn encode_into(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = self.write_to(out);
    }

    /// Wire form of this token as a new string.
    #[must_use]
    pub fn encoded(&self) -> String {
        let mut out = String::new();
        self.encode_into(&mut out);
        out
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

/// Encode a token sequence back into its wire form.
///
/// This is the exact inverse of [`tokenize`](crate::tokenize).
#[must_use]
pub fn encode(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.len() * 8);
    for token in tokens {
        token.encode_into(&mut out);
    }
    out
}

/// Concatenate the text tokens of a sequence, dropping every escape sequence.
#[must_use]
pub fn plain_text(tokens: &[Token]) -> String {
    tokens.iter().filter_map(Token::as_text).collect()
}
