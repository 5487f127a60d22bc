//! Single-pass tokenizer for ANSI/VT text.
//!
//! The tokenizer never fails. Sequences it recognizes are decoded into
//! structured tokens; everything else survives as [`Token::Control`] or
//! [`Token::Text`], so that `encode(&tokenize(s)) == s` holds for every input.
//!
//! Recovery rules:
//!
//! - A CSI whose parameters are not all decimal integers is kept verbatim.
//! - A CSI or OSC with no terminator before end of input (or a CSI broken by
//!   a byte outside the parameter range) fails locally: the ESC is emitted as
//!   a one-character text token and scanning resumes right after it.
//! - A decoded token is only used when it re-encodes to the exact input
//!   bytes. Alternate spellings (`ESC[1A`, `ESC[0K`, `ESC[01m`) are kept
//!   verbatim.

use memchr::{memchr, memchr2};

use crate::token::{CursorDirection, EraseTarget, OscTerminator, Token};

const ESC_BYTE: u8 = 0x1b;
const BEL_BYTE: u8 = 0x07;

/// Split `input` into tokens.
///
/// # Example
/// ```
/// use tinct_ansi::{tokenize, encode, Token};
///
/// let input = "\x1b[1;31mError:\x1b[0m ok";
/// let tokens = tokenize(input);
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Sgr(vec![1, 31]),
///         Token::text("Error:"),
///         Token::Sgr(vec![0]),
///         Token::text(" ok"),
///     ]
/// );
/// assert_eq!(encode(&tokens), input);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(ESC_BYTE, &bytes[pos..]) {
        let esc = pos + offset;
        push_text(&mut tokens, &input[text_start..esc]);
        match scan_escape(input, esc) {
            Some((token, end)) => {
                tokens.push(token);
                pos = end;
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(offset = esc, "incomplete escape sequence kept as text");
                tokens.push(Token::text("\x1b"));
                pos = esc + 1;
            }
        }
        text_start = pos;
    }

    push_text(&mut tokens, &input[text_start..]);
    tokens
}

fn push_text(tokens: &mut Vec<Token>, text: &str) {
    if !text.is_empty() {
        tokens.push(Token::text(text));
    }
}

/// Scan the sequence starting at the ESC at byte `esc`.
///
/// Returns the token and the byte offset just past it, or `None` on a local
/// failure.
fn scan_escape(input: &str, esc: usize) -> Option<(Token, usize)> {
    let bytes = input.as_bytes();
    match *bytes.get(esc + 1)? {
        b'[' => scan_csi(input, esc),
        b']' => scan_osc(input, esc),
        // A second ESC starts its own sequence.
        ESC_BYTE => None,
        _ => {
            let next = input[esc + 1..].chars().next()?;
            let end = esc + 1 + next.len_utf8();
            Some((Token::Control(input[esc..end].to_owned()), end))
        }
    }
}

fn scan_csi(input: &str, esc: usize) -> Option<(Token, usize)> {
    let bytes = input.as_bytes();
    let body_start = esc + 2;
    let mut i = body_start;
    loop {
        match *bytes.get(i)? {
            0x20..=0x3f => i += 1,
            0x40..=0x7e => break,
            _ => return None,
        }
    }

    let end = i + 1;
    let raw = &input[esc..end];
    let token = decode_csi(&input[body_start..i], bytes[i])
        .filter(|token| token.encoded() == raw)
        .unwrap_or_else(|| Token::Control(raw.to_owned()));
    Some((token, end))
}

fn decode_csi(body: &str, final_byte: u8) -> Option<Token> {
    let params = parse_params(body)?;
    if final_byte == b'm' {
        return Some(Token::Sgr(params));
    }
    if params.len() > 1 {
        return None;
    }
    let first = params.first().copied();
    if let Some(direction) = CursorDirection::from_final_byte(final_byte) {
        return Some(Token::Cursor {
            count: first.unwrap_or(1),
            direction,
        });
    }
    EraseTarget::from_final_byte(final_byte).map(|target| Token::Erase {
        mode: first.unwrap_or(0),
        target,
    })
}

/// Parse `;`-separated decimal parameters.
///
/// Returns `None` when a non-empty parameter is not a decimal `u16`. Empty
/// parameters read as 0.
fn parse_params(body: &str) -> Option<Vec<u16>> {
    if body.is_empty() {
        return Some(Vec::new());
    }
    body.split(';')
        .map(|part| {
            if part.is_empty() {
                Some(0)
            } else if part.bytes().all(|b| b.is_ascii_digit()) {
                part.parse::<u16>().ok()
            } else {
                None
            }
        })
        .collect()
}

fn scan_osc(input: &str, esc: usize) -> Option<(Token, usize)> {
    let bytes = input.as_bytes();
    let body_start = esc + 2;
    let mut search = body_start;

    let (body_end, end, terminator) = loop {
        let offset = memchr2(BEL_BYTE, ESC_BYTE, &bytes[search..])?;
        let at = search + offset;
        if bytes[at] == BEL_BYTE {
            break (at, at + 1, OscTerminator::Bel);
        }
        if bytes.get(at + 1) == Some(&b'\\') {
            break (at, at + 2, OscTerminator::St);
        }
        // Stray ESC inside the payload; keep looking.
        search = at + 1;
    };

    let raw = &input[esc..end];
    let body = &input[body_start..body_end];
    let token = match body.split_once(';') {
        Some((command, data)) => Token::Osc {
            command: command.to_owned(),
            data: data.to_owned(),
            terminator,
        },
        None => Token::Control(raw.to_owned()),
    };
    Some((token, end))
}
