//! Color types and downsampling across terminal profiles.

use crate::profile::TerminalProfile;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Compute perceived luminance (BT.709) as a `u8` (0 = black, 255 = white).
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        // ITU-R BT.709 luma: 0.2126 R + 0.7152 G + 0.0722 B
        let r = self.r as u32;
        let g = self.g as u32;
        let b = self.b as u32;
        let luma = 2126 * r + 7152 * g + 722 * b;
        ((luma + 5000) / 10_000) as u8
    }

    /// Difference between the strongest and weakest channel.
    #[must_use]
    pub fn spread(self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }
}

/// The 16 named ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    /// Black (index 0).
    Black = 0,
    /// Red (index 1).
    Red = 1,
    /// Green (index 2).
    Green = 2,
    /// Yellow (index 3).
    Yellow = 3,
    /// Blue (index 4).
    Blue = 4,
    /// Magenta (index 5).
    Magenta = 5,
    /// Cyan (index 6).
    Cyan = 6,
    /// White (index 7).
    White = 7,
    /// Bright black (index 8).
    BrightBlack = 8,
    /// Bright red (index 9).
    BrightRed = 9,
    /// Bright green (index 10).
    BrightGreen = 10,
    /// Bright yellow (index 11).
    BrightYellow = 11,
    /// Bright blue (index 12).
    BrightBlue = 12,
    /// Bright magenta (index 13).
    BrightMagenta = 13,
    /// Bright cyan (index 14).
    BrightCyan = 14,
    /// Bright white (index 15).
    BrightWhite = 15,
}

impl Ansi16 {
    /// Return the raw ANSI index (0–15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert a `u8` index to an `Ansi16` variant, returning `None` if out of range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Black),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Magenta),
            6 => Some(Self::Cyan),
            7 => Some(Self::White),
            8 => Some(Self::BrightBlack),
            9 => Some(Self::BrightRed),
            10 => Some(Self::BrightGreen),
            11 => Some(Self::BrightYellow),
            12 => Some(Self::BrightBlue),
            13 => Some(Self::BrightMagenta),
            14 => Some(Self::BrightCyan),
            15 => Some(Self::BrightWhite),
            _ => None,
        }
    }

    /// Whether this is one of the bright variants (8–15).
    #[must_use]
    pub const fn is_bright(self) -> bool {
        self.as_u8() >= 8
    }

    /// The basic (0–7) color this variant is a shade of.
    #[must_use]
    pub const fn to_basic(self) -> Self {
        match Self::from_u8(self.as_u8() & 0x07) {
            Some(basic) => basic,
            None => Self::Black,
        }
    }
}

/// A terminal color at one of three fidelity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 named colors.
    Named(Ansi16),
    /// xterm 256-color palette index.
    Indexed(u8),
    /// True-color RGB value.
    Rgb(Rgb),
}

impl Color {
    /// Create a true-color RGB value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Convert this color to an RGB triplet regardless of its fidelity level.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Indexed(idx) => ansi256_to_rgb(idx),
            Self::Named(color) => ansi16_to_rgb(color),
        }
    }

    /// Map this color into the palette of `profile`.
    ///
    /// Returns `None` for [`TerminalProfile::NoColor`].
    #[must_use]
    pub fn downsample(self, profile: TerminalProfile) -> Option<Self> {
        downsample(self, profile)
    }
}

impl From<Ansi16> for Color {
    fn from(color: Ansi16) -> Self {
        Self::Named(color)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

/// Map an arbitrary color into the palette supported by `profile`.
///
/// - `TrueColor`: identity.
/// - `Xterm256`: RGB is quantized onto the 6×6×6 cube (the grayscale ramp
///   232–255 is not targeted); indexed and named colors pass through.
/// - `Basic16`: RGB and indexed colors collapse onto the 8 basic colors via
///   [`rgb_to_basic`]; named colors pass through.
/// - `NoColor`: always `None`.
#[must_use]
pub fn downsample(color: Color, profile: TerminalProfile) -> Option<Color> {
    match profile {
        TerminalProfile::TrueColor => Some(color),
        TerminalProfile::Xterm256 => Some(match color {
            Color::Rgb(rgb) => Color::Indexed(rgb_to_cube_index(rgb)),
            other => other,
        }),
        TerminalProfile::Basic16 => Some(match color {
            Color::Rgb(rgb) => Color::Named(rgb_to_basic(rgb)),
            Color::Indexed(idx) => Color::Named(indexed_to_basic(idx)),
            named @ Color::Named(_) => named,
        }),
        TerminalProfile::NoColor => None,
    }
}

const ANSI16_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // Black
    Rgb::new(205, 0, 0),     // Red
    Rgb::new(0, 205, 0),     // Green
    Rgb::new(205, 205, 0),   // Yellow
    Rgb::new(0, 0, 238),     // Blue
    Rgb::new(205, 0, 205),   // Magenta
    Rgb::new(0, 205, 205),   // Cyan
    Rgb::new(229, 229, 229), // White
    Rgb::new(127, 127, 127), // Bright Black
    Rgb::new(255, 0, 0),     // Bright Red
    Rgb::new(0, 255, 0),     // Bright Green
    Rgb::new(255, 255, 0),   // Bright Yellow
    Rgb::new(92, 92, 255),   // Bright Blue
    Rgb::new(255, 0, 255),   // Bright Magenta
    Rgb::new(0, 255, 255),   // Bright Cyan
    Rgb::new(255, 255, 255), // Bright White
];

/// Channel spread below which a color is treated as a gray.
const ACHROMATIC_SPREAD: u8 = 40;

/// Convert an ANSI 16-color value to its canonical RGB representation.
#[must_use]
pub fn ansi16_to_rgb(color: Ansi16) -> Rgb {
    ANSI16_PALETTE[color.as_u8() as usize]
}

/// Convert an ANSI 256-color index to its RGB representation.
#[must_use]
pub fn ansi256_to_rgb(index: u8) -> Rgb {
    if index < 16 {
        return ANSI16_PALETTE[index as usize];
    }
    if index >= 232 {
        let gray = 8 + 10 * (index - 232);
        return Rgb::new(gray, gray, gray);
    }
    let idx = index - 16;
    let r = idx / 36;
    let g = (idx / 6) % 6;
    let b = idx % 6;
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    Rgb::new(LEVELS[r as usize], LEVELS[g as usize], LEVELS[b as usize])
}

/// Quantize a channel to one of six cube levels: `round(v / 255 * 5)`.
fn cube_level(v: u8) -> u8 {
    ((u16::from(v) * 5 + 127) / 255) as u8
}

/// Quantize an RGB color onto the xterm 6×6×6 cube: `16 + 36·r + 6·g + b`.
#[must_use]
pub fn rgb_to_cube_index(rgb: Rgb) -> u8 {
    16 + 36 * cube_level(rgb.r) + 6 * cube_level(rgb.g) + cube_level(rgb.b)
}

/// Collapse an RGB color onto one of the 8 basic colors.
///
/// Grays (channel spread under 40) become black or white by luminance.
/// Otherwise each channel above the midpoint of the strongest and weakest
/// channel contributes its bit (red 1, green 2, blue 4), which selects the
/// basic color with the same index.
#[must_use]
pub fn rgb_to_basic(rgb: Rgb) -> Ansi16 {
    if rgb.spread() < ACHROMATIC_SPREAD {
        return if rgb.luminance_u8() >= 128 {
            Ansi16::White
        } else {
            Ansi16::Black
        };
    }

    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let mid = (u16::from(max) + u16::from(min)) / 2;
    let mut index = 0u8;
    if u16::from(rgb.r) > mid {
        index |= 1;
    }
    if u16::from(rgb.g) > mid {
        index |= 2;
    }
    if u16::from(rgb.b) > mid {
        index |= 4;
    }
    Ansi16::from_u8(index).unwrap_or(Ansi16::Black)
}

/// Collapse a 256-palette index onto one of the 8 basic colors.
#[must_use]
pub fn indexed_to_basic(index: u8) -> Ansi16 {
    match Ansi16::from_u8(index) {
        Some(named) => named.to_basic(),
        None => rgb_to_basic(ansi256_to_rgb(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Rgb tests ---

    #[test]
    fn rgb_luminance_black_is_zero() {
        assert_eq!(Rgb::new(0, 0, 0).luminance_u8(), 0);
    }

    #[test]
    fn rgb_luminance_white_is_255() {
        assert_eq!(Rgb::new(255, 255, 255).luminance_u8(), 255);
    }

    #[test]
    fn rgb_spread() {
        assert_eq!(Rgb::new(10, 200, 50).spread(), 190);
        assert_eq!(Rgb::new(7, 7, 7).spread(), 0);
    }

    // --- Ansi16 tests ---

    #[test]
    fn ansi16_from_u8_valid_range() {
        for i in 0..=15 {
            let color = Ansi16::from_u8(i).unwrap();
            assert_eq!(color.as_u8(), i);
        }
        assert!(Ansi16::from_u8(16).is_none());
    }

    #[test]
    fn ansi16_bright_folds_to_basic() {
        assert!(Ansi16::BrightCyan.is_bright());
        assert!(!Ansi16::Cyan.is_bright());
        assert_eq!(Ansi16::BrightCyan.to_basic(), Ansi16::Cyan);
        assert_eq!(Ansi16::Red.to_basic(), Ansi16::Red);
    }

    // --- ansi256_to_rgb tests ---

    #[test]
    fn ansi256_to_rgb_cube_corners() {
        assert_eq!(ansi256_to_rgb(16), Rgb::new(0, 0, 0));
        assert_eq!(ansi256_to_rgb(196), Rgb::new(255, 0, 0));
        assert_eq!(ansi256_to_rgb(231), Rgb::new(255, 255, 255));
    }

    #[test]
    fn ansi256_to_rgb_grayscale() {
        assert_eq!(ansi256_to_rgb(232), Rgb::new(8, 8, 8));
        assert_eq!(ansi256_to_rgb(255), Rgb::new(238, 238, 238));
    }

    #[test]
    fn ansi256_low_indices_use_palette() {
        assert_eq!(ansi256_to_rgb(1), Rgb::new(205, 0, 0));
        assert_eq!(Color::Named(Ansi16::Blue).to_rgb(), Rgb::new(0, 0, 238));
    }

    // --- Xterm256 tests ---

    #[test]
    fn cube_index_primaries() {
        assert_eq!(rgb_to_cube_index(Rgb::new(255, 0, 0)), 196);
        assert_eq!(rgb_to_cube_index(Rgb::new(0, 255, 0)), 46);
        assert_eq!(rgb_to_cube_index(Rgb::new(0, 0, 255)), 21);
        assert_eq!(rgb_to_cube_index(Rgb::new(255, 255, 255)), 231);
        assert_eq!(rgb_to_cube_index(Rgb::new(0, 0, 0)), 16);
    }

    #[test]
    fn cube_index_rounds_half_levels() {
        // 25/51 rounds down, 26/51 rounds up.
        assert_eq!(rgb_to_cube_index(Rgb::new(25, 0, 0)), 16);
        assert_eq!(rgb_to_cube_index(Rgb::new(26, 0, 0)), 52);
    }

    #[test]
    fn cube_ignores_grayscale_ramp() {
        // Mid gray lands in the cube, not in 232..=255.
        assert_eq!(rgb_to_cube_index(Rgb::new(128, 128, 128)), 145);
    }

    #[test]
    fn xterm256_passes_indexed_and_named() {
        let p = TerminalProfile::Xterm256;
        assert_eq!(downsample(Color::Indexed(240), p), Some(Color::Indexed(240)));
        assert_eq!(
            downsample(Color::Named(Ansi16::BrightRed), p),
            Some(Color::Named(Ansi16::BrightRed))
        );
        assert_eq!(
            downsample(Color::rgb(255, 0, 0), p),
            Some(Color::Indexed(196))
        );
    }

    // --- Basic16 tests ---

    #[test]
    fn basic16_near_white_is_white() {
        assert_eq!(
            Color::rgb(250, 250, 250).downsample(TerminalProfile::Basic16),
            Some(Color::Named(Ansi16::White))
        );
    }

    #[test]
    fn basic16_dark_gray_is_black() {
        assert_eq!(rgb_to_basic(Rgb::new(60, 60, 60)), Ansi16::Black);
        assert_eq!(rgb_to_basic(Rgb::new(0, 0, 0)), Ansi16::Black);
    }

    #[test]
    fn basic16_primaries_and_secondaries() {
        assert_eq!(rgb_to_basic(Rgb::new(255, 0, 0)), Ansi16::Red);
        assert_eq!(rgb_to_basic(Rgb::new(0, 200, 0)), Ansi16::Green);
        assert_eq!(rgb_to_basic(Rgb::new(10, 20, 240)), Ansi16::Blue);
        assert_eq!(rgb_to_basic(Rgb::new(250, 220, 0)), Ansi16::Yellow);
        assert_eq!(rgb_to_basic(Rgb::new(200, 0, 200)), Ansi16::Magenta);
        assert_eq!(rgb_to_basic(Rgb::new(0, 180, 190)), Ansi16::Cyan);
    }

    #[test]
    fn basic16_orange_reads_as_yellow() {
        assert_eq!(rgb_to_basic(Rgb::new(255, 140, 0)), Ansi16::Yellow);
    }

    #[test]
    fn basic16_indexed() {
        assert_eq!(indexed_to_basic(3), Ansi16::Yellow);
        assert_eq!(indexed_to_basic(12), Ansi16::Blue);
        assert_eq!(indexed_to_basic(196), Ansi16::Red);
        assert_eq!(indexed_to_basic(255), Ansi16::White);
        assert_eq!(indexed_to_basic(232), Ansi16::Black);
    }

    #[test]
    fn basic16_named_pass_through() {
        assert_eq!(
            downsample(Color::Named(Ansi16::BrightMagenta), TerminalProfile::Basic16),
            Some(Color::Named(Ansi16::BrightMagenta))
        );
    }

    // --- Profile edge tests ---

    #[test]
    fn truecolor_is_identity() {
        let c = Color::rgb(12, 34, 56);
        assert_eq!(c.downsample(TerminalProfile::TrueColor), Some(c));
    }

    #[test]
    fn no_color_drops_everything() {
        for c in [
            Color::rgb(1, 2, 3),
            Color::Indexed(9),
            Color::Named(Ansi16::Red),
        ] {
            assert_eq!(c.downsample(TerminalProfile::NoColor), None);
        }
    }
}
