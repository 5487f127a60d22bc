//! Text attributes: optional colors plus style effect flags.

use crate::color::Color;

bitflags::bitflags! {
    /// Style effect flags addressable through SGR.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD          = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Reverse video (swap fg/bg).
        const INVERSE       = 0b0001_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0010_0000;
    }
}

/// Visual attributes of a run of text.
///
/// The default value has no colors and no effects; it renders as plain
/// terminal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attributes {
    /// Foreground color, `None` for the terminal default.
    pub fg: Option<Color>,
    /// Background color, `None` for the terminal default.
    pub bg: Option<Color>,
    /// Effect flags.
    pub flags: StyleFlags,
}

impl Attributes {
    /// Default attributes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Add effect flags.
    #[must_use]
    pub fn with(mut self, flags: StyleFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.with(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.with(StyleFlags::DIM)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.with(StyleFlags::ITALIC)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.with(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        self.with(StyleFlags::INVERSE)
    }

    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.with(StyleFlags::STRIKETHROUGH)
    }

    /// Check whether every flag in `flags` is set.
    #[inline]
    #[must_use]
    pub fn has(&self, flags: StyleFlags) -> bool {
        self.flags.contains(flags)
    }

    /// True when no color and no effect is set.
    #[inline]
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.flags.is_empty()
    }

    /// Fill unset colors from `base` and union the flags.
    ///
    /// Colors already set on `self` win.
    #[must_use]
    pub fn merge(&self, base: &Attributes) -> Attributes {
        Attributes {
            fg: self.fg.or(base.fg),
            bg: self.bg.or(base.bg),
            flags: self.flags | base.flags,
        }
    }
}
