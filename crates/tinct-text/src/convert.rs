//! Conversion between token streams and [`StyledText`].

use tinct_ansi::{Token, encode, plain_text, tokenize};
use tinct_style::{Attributes, CacheStats, ParamCache, StyleState, TerminalProfile, to_params};

use crate::span::TextSpan;
use crate::styled::StyledText;

/// Fold a token stream into styled spans.
///
/// Text accumulates under the running attributes. An SGR token closes the
/// pending span and updates the attributes; any other token closes the
/// pending span without touching the style.
#[must_use]
pub fn tokens_to_styled_text(tokens: &[Token]) -> StyledText {
    let mut state = StyleState::new();
    let mut pending = String::new();
    let mut out = StyledText::new();

    for token in tokens {
        match token {
            Token::Text(text) => pending.push_str(text),
            Token::Sgr(params) => {
                flush(&mut out, &mut pending, state.attributes());
                state.apply(params);
            }
            _ => flush(&mut out, &mut pending, state.attributes()),
        }
    }
    flush(&mut out, &mut pending, state.attributes());
    out
}

fn flush(out: &mut StyledText, pending: &mut String, attributes: Attributes) {
    if !pending.is_empty() {
        out.push(TextSpan::new(std::mem::take(pending), attributes));
    }
}

/// Render styled text as tokens using true color.
#[must_use]
pub fn styled_text_to_tokens(text: &StyledText) -> Vec<Token> {
    styled_text_to_tokens_with_profile(text, TerminalProfile::TrueColor)
}

/// Render styled text as tokens for `profile`.
///
/// Each styled span is preceded by its SGR and unstyled spans are emitted
/// as bare text. If any SGR was emitted, the stream ends with a reset. A
/// span does not close its predecessor's style, so an unstyled span after
/// a styled one renders in that style; use
/// [`styled_text_to_isolated_tokens`] when each span must render alone.
#[must_use]
pub fn styled_text_to_tokens_with_profile(
    text: &StyledText,
    profile: TerminalProfile,
) -> Vec<Token> {
    emit_tokens(text, false, |attrs| to_params(attrs, profile))
}

/// Render styled text as tokens for `profile`, isolating each span.
///
/// Like [`styled_text_to_tokens_with_profile`], but a reset is emitted
/// before any span whose attributes differ from the style currently open,
/// so parsing the output gives back the same spans.
#[must_use]
pub fn styled_text_to_isolated_tokens(
    text: &StyledText,
    profile: TerminalProfile,
) -> Vec<Token> {
    emit_tokens(text, true, |attrs| to_params(attrs, profile))
}

fn emit_tokens<F>(text: &StyledText, isolate: bool, mut params_for: F) -> Vec<Token>
where
    F: FnMut(&Attributes) -> Vec<u16>,
{
    let mut tokens = Vec::with_capacity(text.spans().len() * 2 + 1);
    let mut open = Attributes::default();
    let mut styled = false;

    for span in text.spans() {
        if isolate && !open.is_default() && span.attributes != open {
            tokens.push(Token::reset());
            open = Attributes::default();
        }
        if !span.attributes.is_default() {
            let params = params_for(&span.attributes);
            if !params.is_empty() {
                tokens.push(Token::Sgr(params));
                open = span.attributes;
                styled = true;
            }
        }
        if !span.is_empty() {
            tokens.push(Token::Text(span.text.clone()));
        }
    }

    if styled {
        tokens.push(Token::reset());
    }
    tokens
}

/// Parse ANSI text into styled spans.
#[must_use]
pub fn parse_styled(input: &str) -> StyledText {
    tokens_to_styled_text(&tokenize(input))
}

/// Render styled text to an ANSI string for `profile`.
#[must_use]
pub fn render_styled(text: &StyledText, profile: TerminalProfile) -> String {
    encode(&styled_text_to_tokens_with_profile(text, profile))
}

/// Render styled text to an ANSI string for `profile`, isolating each span.
///
/// Parsing the result yields spans equal to `text` up to merging of
/// adjacent equal spans.
#[must_use]
pub fn render_styled_isolated(text: &StyledText, profile: TerminalProfile) -> String {
    encode(&styled_text_to_isolated_tokens(text, profile))
}

/// Remove every escape sequence, keeping only text.
#[must_use]
pub fn strip_ansi(input: &str) -> String {
    if !input.contains('\x1b') {
        return input.to_owned();
    }
    plain_text(&tokenize(input))
}

/// Renders styled text for one profile, memoizing SGR generation.
///
/// Output is identical to [`styled_text_to_tokens_with_profile`].
#[derive(Debug)]
pub struct StyledRenderer {
    profile: TerminalProfile,
    cache: ParamCache,
}

impl StyledRenderer {
    /// Create a renderer with a default-sized parameter cache.
    #[must_use]
    pub fn new(profile: TerminalProfile) -> Self {
        Self::with_cache(profile, ParamCache::with_default_capacity())
    }

    /// Create a renderer around an existing cache.
    #[must_use]
    pub fn with_cache(profile: TerminalProfile, cache: ParamCache) -> Self {
        Self { profile, cache }
    }

    /// The output profile.
    #[must_use]
    pub const fn profile(&self) -> TerminalProfile {
        self.profile
    }

    /// Render to tokens.
    pub fn tokens(&mut self, text: &StyledText) -> Vec<Token> {
        let profile = self.profile;
        let cache = &mut self.cache;
        emit_tokens(text, false, |attrs| cache.get_or_compute(attrs, profile).to_vec())
    }

    /// Render to an ANSI string.
    pub fn render(&mut self, text: &StyledText) -> String {
        encode(&self.tokens(text))
    }

    /// Statistics of the parameter cache.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
