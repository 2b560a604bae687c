//! Text rasterizer
//!
//! Turns strings into column-major color buffers using a parsed font.
//! Buffers are never clipped here: the caller sizes them from
//! [`measure_width`] and [`measure_height`], and clipping happens only when
//! a buffer is composited onto the display.

pub mod text;

use core::fmt;

pub use text::{compose, draw, measure_height, measure_width, render, TextRun};

/// Errors raised while rasterizing text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RasterError {
    /// Character outside the single-byte range 0–255
    Domain {
        /// Offending character
        ch: char,
    },
    /// Target buffer too small for the text at the requested origin
    Bounds,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::Domain { ch } => {
                write!(f, "character U+{:04X} outside the font's 8-bit range", *ch as u32)
            }
            RasterError::Bounds => f.write_str("text does not fit in the target buffer"),
        }
    }
}
