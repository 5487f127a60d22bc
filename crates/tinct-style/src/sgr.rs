//! SGR (Select Graphic Rendition) interpretation and generation.
//!
//! [`apply_params`] folds a parameter list into [`Attributes`];
//! [`to_params`] produces the parameter list that establishes a set of
//! attributes from a reset state.
//!
//! # Code Reference
//!
//! | Code | Effect |
//! |------|--------|
//! | `0` | reset |
//! | `1` `2` `3` `4` `7` `9` | bold, dim, italic, underline, inverse, strikethrough |
//! | `22` | clear bold and dim |
//! | `23` `24` `27` `29` | clear italic, underline, inverse, strikethrough |
//! | `30–37` `90–97` | basic / bright foreground |
//! | `40–47` `100–107` | basic / bright background |
//! | `38;5;n` `48;5;n` | 256-palette fg / bg |
//! | `38;2;r;g;b` `48;2;r;g;b` | true-color fg / bg |
//! | `39` `49` | default fg / bg |

use crate::attributes::{Attributes, StyleFlags};
use crate::color::{Ansi16, Color};
use crate::profile::TerminalProfile;

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &str = "\x1b[0m";

/// SGR attribute codes for a style flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrCodes {
    /// Enable code
    pub on: u16,
    /// Disable code
    pub off: u16,
}

/// SGR codes for bold (on=1, off=22).
pub const SGR_BOLD: SgrCodes = SgrCodes { on: 1, off: 22 };
/// SGR codes for dim (on=2, off=22).
pub const SGR_DIM: SgrCodes = SgrCodes { on: 2, off: 22 };
/// SGR codes for italic (on=3, off=23).
pub const SGR_ITALIC: SgrCodes = SgrCodes { on: 3, off: 23 };
/// SGR codes for underline (on=4, off=24).
pub const SGR_UNDERLINE: SgrCodes = SgrCodes { on: 4, off: 24 };
/// SGR codes for inverse video (on=7, off=27).
pub const SGR_INVERSE: SgrCodes = SgrCodes { on: 7, off: 27 };
/// SGR codes for strikethrough (on=9, off=29).
pub const SGR_STRIKETHROUGH: SgrCodes = SgrCodes { on: 9, off: 29 };

/// Flags in generation order.
pub const FLAG_TABLE: [(StyleFlags, SgrCodes); 6] = [
    (StyleFlags::BOLD, SGR_BOLD),
    (StyleFlags::DIM, SGR_DIM),
    (StyleFlags::ITALIC, SGR_ITALIC),
    (StyleFlags::UNDERLINE, SGR_UNDERLINE),
    (StyleFlags::INVERSE, SGR_INVERSE),
    (StyleFlags::STRIKETHROUGH, SGR_STRIKETHROUGH),
];

const EXTENDED_FG: u16 = 38;
const EXTENDED_BG: u16 = 48;
const MODE_INDEXED: u16 = 5;
const MODE_RGB: u16 = 2;

/// Get SGR codes for a single style flag.
#[must_use]
pub fn sgr_codes_for_flag(flag: StyleFlags) -> Option<SgrCodes> {
    FLAG_TABLE
        .iter()
        .find(|(f, _)| *f == flag)
        .map(|(_, codes)| *codes)
}

/// Apply an SGR parameter list to `attrs`.
///
/// An empty list is a reset. Unknown codes are ignored. An extended color
/// (`38`/`48`) missing trailing parameters consumes the rest of the list
/// and changes nothing; an extended color whose index or channel exceeds
/// 255 consumes its group and is ignored.
#[must_use]
pub fn apply_params(params: &[u16], attrs: Attributes) -> Attributes {
    if params.is_empty() {
        return Attributes::default();
    }

    let mut attrs = attrs;
    let mut i = 0;
    while i < params.len() {
        let code = params[i];
        match code {
            0 => attrs = Attributes::default(),
            1 => attrs.flags.insert(StyleFlags::BOLD),
            2 => attrs.flags.insert(StyleFlags::DIM),
            3 => attrs.flags.insert(StyleFlags::ITALIC),
            4 => attrs.flags.insert(StyleFlags::UNDERLINE),
            7 => attrs.flags.insert(StyleFlags::INVERSE),
            9 => attrs.flags.insert(StyleFlags::STRIKETHROUGH),
            22 => attrs.flags.remove(StyleFlags::BOLD | StyleFlags::DIM),
            23 => attrs.flags.remove(StyleFlags::ITALIC),
            24 => attrs.flags.remove(StyleFlags::UNDERLINE),
            27 => attrs.flags.remove(StyleFlags::INVERSE),
            29 => attrs.flags.remove(StyleFlags::STRIKETHROUGH),
            30..=37 => attrs.fg = named(code - 30).or(attrs.fg),
            EXTENDED_FG => {
                if let Some(color) = parse_extended_color(params, &mut i) {
                    attrs.fg = Some(color);
                }
            }
            39 => attrs.fg = None,
            40..=47 => attrs.bg = named(code - 40).or(attrs.bg),
            EXTENDED_BG => {
                if let Some(color) = parse_extended_color(params, &mut i) {
                    attrs.bg = Some(color);
                }
            }
            49 => attrs.bg = None,
            90..=97 => attrs.fg = named(code - 90 + 8).or(attrs.fg),
            100..=107 => attrs.bg = named(code - 100 + 8).or(attrs.bg),
            _ => {}
        }
        i += 1;
    }
    attrs
}

fn named(index: u16) -> Option<Color> {
    u8::try_from(index)
        .ok()
        .and_then(Ansi16::from_u8)
        .map(Color::Named)
}

/// Parse the extended color introduced by the `38`/`48` at `params[*i]`.
///
/// On return `*i` points at the last parameter the color consumed.
fn parse_extended_color(params: &[u16], i: &mut usize) -> Option<Color> {
    let mode = *params.get(*i + 1)?;
    match mode {
        MODE_INDEXED => {
            let Some(&index) = params.get(*i + 2) else {
                *i = params.len();
                return None;
            };
            *i += 2;
            u8::try_from(index).ok().map(Color::Indexed)
        }
        MODE_RGB => {
            let Some(channels) = params.get(*i + 2..*i + 5) else {
                *i = params.len();
                return None;
            };
            *i += 4;
            let r = u8::try_from(channels[0]).ok()?;
            let g = u8::try_from(channels[1]).ok()?;
            let b = u8::try_from(channels[2]).ok()?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

/// Generate the SGR parameters that establish `attrs` from a reset state.
///
/// Effect codes come first (in [`FLAG_TABLE`] order), then the foreground,
/// then the background. Colors are downsampled to `profile`; under
/// [`TerminalProfile::NoColor`] only effect codes are emitted. Default
/// attributes produce an empty list.
#[must_use]
pub fn to_params(attrs: &Attributes, profile: TerminalProfile) -> Vec<u16> {
    let mut params = Vec::with_capacity(8);
    for (flag, codes) in FLAG_TABLE {
        if attrs.flags.contains(flag) {
            params.push(codes.on);
        }
    }
    if let Some(fg) = attrs.fg.and_then(|c| c.downsample(profile)) {
        push_color(&mut params, fg, Layer::Foreground);
    }
    if let Some(bg) = attrs.bg.and_then(|c| c.downsample(profile)) {
        push_color(&mut params, bg, Layer::Background);
    }
    params
}

#[derive(Clone, Copy)]
enum Layer {
    Foreground,
    Background,
}

fn push_color(params: &mut Vec<u16>, color: Color, layer: Layer) {
    let (offset, extended) = match layer {
        Layer::Foreground => (0, EXTENDED_FG),
        Layer::Background => (10, EXTENDED_BG),
    };
    match color {
        Color::Named(named) => {
            let index = u16::from(named.as_u8());
            let base = if named.is_bright() { 90 + index - 8 } else { 30 + index };
            params.push(base + offset);
        }
        Color::Indexed(index) => {
            params.extend_from_slice(&[extended, MODE_INDEXED, u16::from(index)]);
        }
        Color::Rgb(rgb) => params.extend_from_slice(&[
            extended,
            MODE_RGB,
            u16::from(rgb.r),
            u16::from(rgb.g),
            u16::from(rgb.b),
        ]),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_color() -> impl Strategy<Value = Color> {
        prop_oneof![
            (0u8..16).prop_map(|i| Color::Named(Ansi16::from_u8(i).unwrap())),
            any::<u8>().prop_map(Color::Indexed),
            (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b)),
        ]
    }

    fn arb_attributes() -> impl Strategy<Value = Attributes> {
        (
            prop::option::of(arb_color()),
            prop::option::of(arb_color()),
            0u8..64,
        )
            .prop_map(|(fg, bg, bits)| Attributes {
                fg,
                bg,
                flags: StyleFlags::from_bits_truncate(bits),
            })
    }

    proptest! {
        #[test]
        fn generate_then_apply_reproduces(attrs in arb_attributes()) {
            let params = to_params(&attrs, TerminalProfile::TrueColor);
            prop_assert_eq!(apply_params(&params, Attributes::default()), attrs);
        }

        #[test]
        fn apply_never_panics(params in prop::collection::vec(any::<u16>(), 0..24)) {
            let _ = apply_params(&params, Attributes::default());
        }
    }
}
