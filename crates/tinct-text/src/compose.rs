//! ANSI-aware line composition: split, truncate and wrap at display columns.
//!
//! All operations work on token streams so escape sequences are never cut,
//! and track the running style so a cut never leaks or loses styling:
//!
//! - the half after a cut starts by re-opening the style active at the cut;
//! - truncation always ends closed with a reset;
//! - wrapped lines that end inside a style are closed with a reset when
//!   more text follows.
//!
//! A cut after visible text drops the single space right after it, so a
//! line never starts with the blank that separated it from the previous
//! one. Any further spaces are kept.

use tinct_ansi::{Token, encode, tokenize};
use tinct_style::StyleState;

use crate::width::find_cell_boundary;

/// Upper bound on lines produced by [`wrap_to_width`].
pub const MAX_WRAP_ITERATIONS: usize = 10_000;

struct Split {
    left: Vec<Token>,
    right: Vec<Token>,
    /// Style active at the cut (or at the end, if nothing was cut).
    state: StyleState,
    cut: bool,
}

/// Walk `tokens` placing up to `column` cells of text on the left.
///
/// With `force_progress`, a first cluster too wide for `column` is placed
/// anyway so a wrap loop always advances.
fn split_tokens(tokens: &[Token], column: usize, force_progress: bool) -> Split {
    let mut state = StyleState::new();
    let mut left = Vec::new();
    let mut used = 0;
    let mut placed_text = false;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Sgr(params) => {
                state.apply(params);
                left.push(token.clone());
            }
            Token::Text(text) => {
                let (mut at, width) = find_cell_boundary(text, column - used, false);
                if at == text.len() {
                    used += width;
                    placed_text |= !text.is_empty();
                    left.push(token.clone());
                    continue;
                }
                if at == 0 && force_progress && !placed_text {
                    at = first_cluster_len(text);
                }

                let (head, mut tail) = text.split_at(at);
                if !head.is_empty() {
                    left.push(Token::text(head));
                    placed_text = true;
                }
                if placed_text {
                    tail = tail.strip_prefix(' ').unwrap_or(tail);
                }
                let rest = &tokens[index + 1..];

                // A reopen followed only by resets would be cancelled at once.
                let mut right = Vec::with_capacity(rest.len() + 2);
                if !state.is_default() && (!tail.is_empty() || !rest.iter().all(Token::is_reset)) {
                    right.push(Token::Sgr(state.reopen_params()));
                }
                if !tail.is_empty() {
                    right.push(Token::text(tail));
                }
                right.extend_from_slice(rest);
                return Split {
                    left,
                    right,
                    state,
                    cut: true,
                };
            }
            _ => left.push(token.clone()),
        }
    }

    Split {
        left,
        right: Vec::new(),
        state,
        cut: false,
    }
}

fn first_cluster_len(text: &str) -> usize {
    use unicode_segmentation::UnicodeSegmentation;
    text.graphemes(true).next().map_or(text.len(), str::len)
}

fn has_visible_text(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .any(|token| token.as_text().is_some_and(|text| !text.is_empty()))
}

/// Split a token stream at display column `column`.
///
/// SGR and other non-text tokens before the cut stay on the left. The text
/// token straddling the column is divided between clusters; if styling is
/// active there, the right half starts with one SGR that re-opens it.
/// Everything after the cut goes to the right unchanged.
#[must_use]
pub fn split_tokens_at_column(tokens: &[Token], column: usize) -> (Vec<Token>, Vec<Token>) {
    let split = split_tokens(tokens, column, false);
    (split.left, split.right)
}

/// Split ANSI text at display column `column`.
///
/// # Example
/// ```
/// use tinct_text::split_visible_columns;
///
/// let (left, right) = split_visible_columns("\x1b[31mHello World\x1b[0m", 5);
/// assert_eq!(left, "\x1b[31mHello");
/// assert_eq!(right, "\x1b[31mWorld\x1b[0m");
/// ```
#[must_use]
pub fn split_visible_columns(input: &str, column: usize) -> (String, String) {
    let (left, right) = split_tokens_at_column(&tokenize(input), column);
    (encode(&left), encode(&right))
}

/// Keep the first `width` columns of ANSI text, closed with a reset.
///
/// Returns an empty string when no text fits. The reset is skipped only
/// when the kept part already ends with one, so truncating twice gives the
/// same result as truncating once.
#[must_use]
pub fn truncate_visible_columns(input: &str, width: usize) -> String {
    let mut left = split_tokens(&tokenize(input), width, false).left;
    if !has_visible_text(&left) {
        return String::new();
    }
    if !left.last().is_some_and(Token::is_reset) {
        left.push(Token::reset());
    }
    encode(&left)
}

/// Wrap ANSI text into lines of at most `width` columns.
///
/// A width of 0 returns the input as a single line. A cluster wider than
/// `width` gets a line of its own. Escape sequences after the last visible
/// text are appended to the final line. At most [`MAX_WRAP_ITERATIONS`]
/// lines are cut; anything left after that becomes the last line.
#[must_use]
pub fn wrap_to_width(input: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![input.to_owned()];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut rest = tokenize(input);
    let mut iterations = 0;

    loop {
        if !has_visible_text(&rest) {
            let tail = encode(&rest);
            match lines.last_mut() {
                Some(last) => last.push_str(&tail),
                None => lines.push(tail),
            }
            break;
        }
        if iterations == MAX_WRAP_ITERATIONS {
            tracing::warn!(
                width,
                lines = lines.len(),
                "wrap iteration ceiling reached; emitting remainder unwrapped"
            );
            lines.push(encode(&rest));
            break;
        }
        iterations += 1;

        let split = split_tokens(&rest, width, true);
        let mut line = split.left;
        if split.cut && !split.state.is_default() && has_visible_text(&split.right) {
            line.push(Token::reset());
        }
        lines.push(encode(&line));
        rest = split.right;
    }
    lines
}
