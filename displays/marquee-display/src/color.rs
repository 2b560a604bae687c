//! Packed RGB color

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 24-bit color stored as `0xRRGGBB`
///
/// Black doubles as the unset pixel value of buffers and frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Rgb(u32);

impl Rgb {
    /// Unset / off
    pub const BLACK: Rgb = Rgb(0);

    /// Build from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build from a packed value, ignoring bits above 24
    pub const fn from_u32(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    /// Packed `0xRRGGBB` value
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Whether this is the unset color
    pub const fn is_black(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.0
    }
}
