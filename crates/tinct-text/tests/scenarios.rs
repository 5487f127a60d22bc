//! End-to-end behavior across the tokenizer, style engine and composer.

use tinct_ansi::{Token, encode, tokenize};
use tinct_style::{Ansi16, Attributes, Color, Rgb, TerminalProfile, apply_params, downsample};
use tinct_text::{
    StyledText, TextSpan, display_width, display_width_ignoring_ansi, parse_styled,
    render_styled_isolated, split_visible_columns, styled_text_to_tokens, truncate_to_display_width,
    truncate_visible_columns, wrap_to_width,
};

const FAMILY: &str = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn error_label_tokenizes_and_round_trips() {
    let input = "\x1b[1;31mError:\x1b[0m ok";
    let tokens = tokenize(input);
    assert_eq!(
        tokens,
        vec![
            Token::Sgr(vec![1, 31]),
            Token::text("Error:"),
            Token::Sgr(vec![0]),
            Token::text(" ok"),
        ]
    );
    assert_eq!(encode(&tokens), input);
}

#[test]
fn truecolor_foreground_is_applied() {
    let attrs = apply_params(&[38, 2, 255, 0, 0], Attributes::default());
    assert_eq!(attrs.fg, Some(Color::Rgb(Rgb::new(255, 0, 0))));
}

#[test]
fn near_white_downsamples_to_white() {
    assert_eq!(
        downsample(Color::rgb(250, 250, 250), TerminalProfile::Basic16),
        Some(Color::Named(Ansi16::White))
    );
}

#[test]
fn split_reopens_red_on_the_right() {
    let (left, right) = split_visible_columns("\x1b[31mHello World\x1b[0m", 5);
    assert_eq!(left, "\x1b[31mHello");
    assert_eq!(right, "\x1b[31mWorld\x1b[0m");
}

// =============================================================================
// Pipelines
// =============================================================================

#[test]
fn parse_then_render_closes_every_style() {
    let text = parse_styled("\x1b[1mbold\x1b[22m and \x1b[3;34mblue italic");
    let rendered = encode(&styled_text_to_tokens(&text));
    assert_eq!(rendered, "\x1b[1mbold and \x1b[3;34mblue italic\x1b[0m");
    assert_eq!(tinct_text::strip_ansi(&rendered), text.plain_text());
}

#[test]
fn isolated_render_parses_back_to_the_same_spans() {
    let text = parse_styled("\x1b[1mbold\x1b[22m and \x1b[3;34mblue italic");
    let rendered = render_styled_isolated(&text, TerminalProfile::TrueColor);
    assert!(rendered.ends_with("\x1b[0m"));
    assert_eq!(parse_styled(&rendered), text);
}

#[test]
fn split_keeps_every_cluster_but_one_separator() {
    for (input, column) in [("ab   cd", 2), ("  ab", 0), ("\x1b[2mx  y\x1b[0m", 1)] {
        let (left, right) = split_visible_columns(input, column);
        let (left, right) = (tinct_text::strip_ansi(&left), tinct_text::strip_ansi(&right));
        let plain = tinct_text::strip_ansi(input);
        if left.is_empty() {
            assert_eq!(right, plain, "{input:?}");
        } else {
            assert_eq!(format!("{left} {right}"), plain, "{input:?}");
        }
    }
}

#[test]
fn wrapped_lines_each_fit_and_close_their_style() {
    let input = "\x1b[32mthe quick brown fox jumps\x1b[0m";
    let lines = wrap_to_width(input, 10);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(display_width_ignoring_ansi(line) <= 10, "{line:?}");
        assert!(line.ends_with("\x1b[0m"), "{line:?}");
    }
    let joined: String = lines.iter().map(|l| tinct_text::strip_ansi(l)).collect();
    assert_eq!(joined.replace(' ', ""), "thequickbrownfoxjumps");
}

#[test]
fn truncate_helpers_agree_on_visible_text() {
    let input = "\x1b[4munder\x1b[0mline";
    let a = truncate_visible_columns(input, 7);
    let b = truncate_to_display_width(input, 7);
    assert_eq!(tinct_text::strip_ansi(&a), "underli");
    assert_eq!(tinct_text::strip_ansi(&b), "underli");
    assert!(a.ends_with("\x1b[0m"));
}

#[test]
fn hyperlinks_and_cursor_moves_are_transparent() {
    let input = "\x1b]8;;https://example.com\x07docs\x1b]8;;\x07\x1b[2C!";
    assert_eq!(display_width_ignoring_ansi(input), 5);
    assert_eq!(encode(&tokenize(input)), input);
}

#[test]
fn malformed_input_survives_every_stage() {
    let input = "ok\x1b[12;xq\x1b";
    assert_eq!(encode(&tokenize(input)), input);
    let truncated = truncate_to_display_width(input, 100);
    assert_eq!(truncated, input);
}

// =============================================================================
// Grapheme safety
// =============================================================================

#[test]
fn family_emoji_is_never_divided_by_split() {
    let text = StyledText::from_spans([
        TextSpan::raw("a"),
        TextSpan::new(FAMILY, Attributes::new().bold()),
    ]);
    let family_width = display_width(FAMILY);
    for width in 0..(1 + family_width) {
        let (left, right) = text.split_by_display_width(width, false);
        let left = left.plain_text();
        let right = right.plain_text();
        assert!(
            left.contains(FAMILY) || right.contains(FAMILY),
            "width {width}: {left:?} | {right:?}"
        );
    }
}

#[test]
fn family_emoji_is_never_divided_by_composer() {
    let input = format!("\x1b[35m{FAMILY}{FAMILY}\x1b[0m");
    for column in 0..5 {
        let (left, right) = split_visible_columns(&input, column);
        let both = format!("{}{}", tinct_text::strip_ansi(&left), tinct_text::strip_ansi(&right));
        assert_eq!(both, format!("{FAMILY}{FAMILY}"));
    }
}

#[test]
fn grapheme_split_reconstructs_plain_text() {
    let text = StyledText::from_spans([
        TextSpan::new("e\u{301}t\u{e9}", Attributes::new().italic()),
        TextSpan::raw(" 日本 "),
        TextSpan::new(FAMILY, Attributes::new().fg(Ansi16::Cyan)),
    ]);
    for k in 0..=text.len() {
        let (left, right) = text.split(k);
        assert_eq!(left.plain_text() + &right.plain_text(), text.plain_text(), "k = {k}");
        assert_eq!(left.len(), k);
    }
}
