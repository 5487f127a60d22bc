#![forbid(unsafe_code)]

//! Colors, attributes and SGR handling for tinct.
//!
//! - [`Color`] / [`Ansi16`] / [`Rgb`] - colors at three fidelity levels
//! - [`TerminalProfile`] - output capability, with environment detection
//! - [`Attributes`] - optional fg/bg plus [`StyleFlags`]
//! - [`apply_params`] / [`to_params`] - SGR interpretation and generation
//! - [`StyleState`] - running attributes over a stream of SGR lists
//! - [`ParamCache`] - LRU memo for [`to_params`]
//!
//! # Example
//! ```
//! use tinct_style::{apply_params, to_params, Ansi16, Attributes, Color, TerminalProfile};
//!
//! let attrs = apply_params(&[1, 38, 2, 255, 0, 0], Attributes::default());
//! assert_eq!(attrs.fg, Some(Color::rgb(255, 0, 0)));
//!
//! assert_eq!(to_params(&attrs, TerminalProfile::Xterm256), vec![1, 38, 5, 196]);
//! assert_eq!(to_params(&attrs, TerminalProfile::Basic16), vec![1, 31]);
//!
//! let near_white = Color::rgb(250, 250, 250);
//! assert_eq!(
//!     near_white.downsample(TerminalProfile::Basic16),
//!     Some(Color::Named(Ansi16::White))
//! );
//! ```

pub mod attributes;
pub mod cache;
pub mod color;
pub mod profile;
pub mod sgr;
pub mod state;

pub use attributes::{Attributes, StyleFlags};
pub use cache::{CacheStats, DEFAULT_CACHE_CAPACITY, ParamCache};
#[cfg(feature = "thread_local_cache")]
pub use cache::{cached_params, clear_thread_cache};
pub use color::{
    Ansi16, Color, Rgb, ansi16_to_rgb, ansi256_to_rgb, downsample, indexed_to_basic,
    rgb_to_basic, rgb_to_cube_index,
};
pub use profile::{DetectInputs, ParseProfileError, TerminalProfile};
pub use sgr::{FLAG_TABLE, SGR_RESET, SgrCodes, apply_params, sgr_codes_for_flag, to_params};
pub use state::StyleState;
