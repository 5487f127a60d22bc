//! Running style state over a stream of SGR parameter lists.

use crate::attributes::Attributes;
use crate::profile::TerminalProfile;
use crate::sgr::{apply_params, to_params};

/// Accumulates SGR parameter lists into the currently active [`Attributes`].
///
/// The state always equals the fold of every list applied since construction
/// or the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleState {
    attributes: Attributes,
}

impl StyleState {
    /// Start from default attributes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: Attributes::new(),
        }
    }

    /// Start from the given attributes.
    #[must_use]
    pub const fn with_attributes(attributes: Attributes) -> Self {
        Self { attributes }
    }

    /// Fold `params` into the state and return the new attributes.
    pub fn apply(&mut self, params: &[u16]) -> Attributes {
        self.attributes = apply_params(params, self.attributes);
        self.attributes
    }

    /// Currently active attributes.
    #[inline]
    #[must_use]
    pub const fn attributes(&self) -> Attributes {
        self.attributes
    }

    /// True when no styling is active.
    #[inline]
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.attributes.is_default()
    }

    /// Return to default attributes.
    pub fn reset(&mut self) {
        self.attributes = Attributes::default();
    }

    /// Parameters that re-establish the current state after a reset.
    #[must_use]
    pub fn reopen_params(&self) -> Vec<u16> {
        to_params(&self.attributes, TerminalProfile::TrueColor)
    }
}
