//! Exercises the full SGR code table through the public API.

use tinct_style::{
    Ansi16, Attributes, Color, StyleFlags, StyleState, TerminalProfile, apply_params, to_params,
};

#[test]
fn every_basic_and_bright_code_maps_to_its_named_color() {
    for i in 0u16..8 {
        let basic = Ansi16::from_u8(i as u8).unwrap();
        let bright = Ansi16::from_u8(i as u8 + 8).unwrap();

        let attrs = apply_params(&[30 + i, 40 + i], Attributes::default());
        assert_eq!(attrs.fg, Some(Color::Named(basic)));
        assert_eq!(attrs.bg, Some(Color::Named(basic)));

        let attrs = apply_params(&[90 + i, 100 + i], Attributes::default());
        assert_eq!(attrs.fg, Some(Color::Named(bright)));
        assert_eq!(attrs.bg, Some(Color::Named(bright)));

        // The generator emits the same codes back.
        assert_eq!(to_params(&attrs, TerminalProfile::TrueColor), vec![90 + i, 100 + i]);
    }
}

#[test]
fn true_color_red_from_extended_sequence() {
    let attrs = apply_params(&[38, 2, 255, 0, 0], Attributes::default());
    assert_eq!(attrs.fg, Some(Color::rgb(255, 0, 0)));
    assert!(attrs.flags.is_empty());
    assert_eq!(attrs.bg, None);
}

#[test]
fn state_machine_tracks_a_realistic_stream() {
    let mut state = StyleState::new();
    for params in [
        vec![1, 4],
        vec![38, 5, 33],
        vec![24],
        vec![48, 2, 10, 20, 30],
        vec![22, 2],
    ] {
        state.apply(&params);
    }
    let attrs = state.attributes();
    assert_eq!(attrs.flags, StyleFlags::DIM);
    assert_eq!(attrs.fg, Some(Color::Indexed(33)));
    assert_eq!(attrs.bg, Some(Color::rgb(10, 20, 30)));
    assert_eq!(state.reopen_params(), vec![2, 38, 5, 33, 48, 2, 10, 20, 30]);
}

#[test]
fn profile_chain_for_one_style() {
    let attrs = Attributes::new()
        .bold()
        .fg(Color::rgb(250, 250, 250))
        .bg(Color::Indexed(196));
    assert_eq!(
        to_params(&attrs, TerminalProfile::TrueColor),
        vec![1, 38, 2, 250, 250, 250, 48, 5, 196]
    );
    assert_eq!(
        to_params(&attrs, TerminalProfile::Xterm256),
        vec![1, 38, 5, 231, 48, 5, 196]
    );
    assert_eq!(to_params(&attrs, TerminalProfile::Basic16), vec![1, 37, 41]);
    assert_eq!(to_params(&attrs, TerminalProfile::NoColor), vec![1]);
}
