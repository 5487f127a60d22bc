//! Terminal color capability profiles and environment detection.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Color capability of the output terminal.
///
/// Controls SGR generation and color downsampling only; parsing accepts every
/// color encoding regardless of profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerminalProfile {
    /// Full 24-bit RGB color.
    #[default]
    TrueColor,
    /// xterm 256-color palette.
    Xterm256,
    /// The 16 basic ANSI colors.
    Basic16,
    /// No color output; style effects only.
    NoColor,
}

impl TerminalProfile {
    /// Choose the best available profile from detection flags.
    ///
    /// `no_color` should reflect explicit user intent (e.g. `NO_COLOR`).
    #[must_use]
    pub const fn from_flags(true_color: bool, colors_256: bool, no_color: bool) -> Self {
        if no_color {
            Self::NoColor
        } else if true_color {
            Self::TrueColor
        } else if colors_256 {
            Self::Xterm256
        } else {
            Self::Basic16
        }
    }

    /// Detect the profile from `NO_COLOR`, `COLORTERM` and `TERM`.
    #[must_use]
    pub fn detect() -> Self {
        DetectInputs::from_env().profile()
    }

    /// Check if this profile supports 24-bit true color.
    #[must_use]
    pub const fn supports_true_color(self) -> bool {
        matches!(self, Self::TrueColor)
    }

    /// Check if this profile emits any color codes at all.
    #[must_use]
    pub const fn supports_color(self) -> bool {
        !matches!(self, Self::NoColor)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrueColor => "truecolor",
            Self::Xterm256 => "xterm256",
            Self::Basic16 => "basic16",
            Self::NoColor => "nocolor",
        }
    }
}

impl fmt::Display for TerminalProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a profile name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProfileError {
    input: String,
}

impl ParseProfileError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown terminal profile '{}' (expected truecolor, xterm256, basic16 or nocolor)",
            self.input
        )
    }
}

impl std::error::Error for ParseProfileError {}

impl FromStr for TerminalProfile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "true-color" => Ok(Self::TrueColor),
            "xterm256" | "256" | "xterm-256color" | "256color" => Ok(Self::Xterm256),
            "basic16" | "16" | "ansi16" | "ansi" => Ok(Self::Basic16),
            "nocolor" | "none" | "mono" | "dumb" => Ok(Self::NoColor),
            _ => Err(ParseProfileError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Raw environment values used for profile detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectInputs {
    /// `NO_COLOR` is present (any value).
    pub no_color: bool,
    /// Value of `TERM`.
    pub term: String,
    /// Value of `COLORTERM`.
    pub colorterm: String,
}

impl DetectInputs {
    /// Read the inputs from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            no_color: env::var_os("NO_COLOR").is_some(),
            term: env::var("TERM").unwrap_or_default(),
            colorterm: env::var("COLORTERM").unwrap_or_default(),
        }
    }

    /// Decide the profile these inputs describe.
    #[must_use]
    pub fn profile(&self) -> TerminalProfile {
        let term = self.term.to_ascii_lowercase();
        let colorterm = self.colorterm.to_ascii_lowercase();
        let no_color = self.no_color || term == "dumb";
        let true_color = colorterm == "truecolor" || colorterm == "24bit";
        let colors_256 = term.contains("256color");
        TerminalProfile::from_flags(true_color, colors_256, no_color)
    }
}
