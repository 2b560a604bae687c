//! Marquee show for color LED matrices
//!
//! Loads a TOML configuration and a YF font, then plays the two-part show:
//! a multi-colored message scrolling right to left, followed by a single
//! word flashing in the middle of the display.
//!
//! Device discovery and the actual LED write are left to the caller, who
//! supplies a [`FrameSink`](marquee_display::FrameSink) together with a
//! clock and a delay.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(feature = "embassy")]
pub mod clock;
pub mod config;
pub mod show;

#[cfg(feature = "embassy")]
pub use clock::{EmbassyClock, EmbassyDelay};
pub use config::{parse_config, ConfigError};
pub use show::{play, play_toml, Show, ShowError, ShowStats};
