//! Configuration type definitions

use heapless::{String, Vec};
use marquee_display::{DisplayGeometry, Rgb};

use crate::animation::DEFAULT_PAUSE_MS;
use crate::raster::TextRun;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum characters in one configured string
pub const MAX_TEXT_LEN: usize = 32;

/// Maximum differently colored words in the scrolling message
pub const MAX_WORDS: usize = 16;

/// Display geometry and refresh rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Columns
    pub width: u16,
    /// Rows
    pub height: u16,
    /// Target frames per second while scrolling
    pub refresh_rate: u16,
}

impl DisplayConfig {
    /// Geometry handed to the compositor
    pub const fn geometry(&self) -> DisplayGeometry {
        DisplayGeometry::new(self.width, self.height)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 8,
            refresh_rate: 25,
        }
    }
}

/// One word of the scrolling message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordConfig {
    /// Text, trailing spaces included
    pub text: String<MAX_TEXT_LEN>,
    /// Packed `0xRRGGBB` color
    pub color: Rgb,
}

impl WordConfig {
    /// Create a word, truncating text past `MAX_TEXT_LEN` bytes
    pub fn new(text: &str, color: Rgb) -> Self {
        Self {
            text: truncated(text),
            color,
        }
    }

    /// Borrow as a rasterizer run
    pub fn as_run(&self) -> TextRun<'_> {
        TextRun::new(self.text.as_str(), self.color)
    }
}

/// Scrolling message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollConfig {
    /// Words laid out left to right without gaps
    pub words: Vec<WordConfig, MAX_WORDS>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        let green = Rgb::from_u32(0x004000);
        let blue = Rgb::from_u32(0x000040);
        let yellow = Rgb::from_u32(0x404000);

        let mut words = Vec::new();
        for _ in 0..2 {
            for (text, color) in [("Post ", green), ("Tenebras ", blue), ("Lux!     ", yellow)] {
                let _ = words.push(WordConfig::new(text, color));
            }
        }
        Self { words }
    }
}

/// Flashing word
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlashConfig {
    /// Text shown centered
    pub text: String<MAX_TEXT_LEN>,
    /// Packed `0xRRGGBB` color
    pub color: Rgb,
    /// Number of on/off cycles
    pub repeat: u8,
    /// Length of each on and each off phase
    pub pause_ms: u32,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            text: truncated("Applause"),
            color: Rgb::from_u32(0x400000),
            repeat: 3,
            pause_ms: DEFAULT_PAUSE_MS,
        }
    }
}

/// Complete marquee configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarqueeConfig {
    pub display: DisplayConfig,
    pub scroll: ScrollConfig,
    pub flash: FlashConfig,
}

/// Copy `text` into a bounded string, cutting at a char boundary
fn truncated(text: &str) -> String<MAX_TEXT_LEN> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display() {
        let display = DisplayConfig::default();
        assert_eq!(display.geometry(), DisplayGeometry::new(64, 8));
        assert_eq!(display.refresh_rate, 25);
    }

    #[test]
    fn test_default_scroll_words() {
        let scroll = ScrollConfig::default();
        assert_eq!(scroll.words.len(), 6);
        assert_eq!(scroll.words[0].text.as_str(), "Post ");
        assert_eq!(scroll.words[1].color, Rgb::from_u32(0x000040));
        assert_eq!(scroll.words[5].text.as_str(), "Lux!     ");
    }

    #[test]
    fn test_default_flash() {
        let flash = FlashConfig::default();
        assert_eq!(flash.text.as_str(), "Applause");
        assert_eq!(flash.repeat, 3);
        assert_eq!(flash.pause_ms, 500);
    }

    #[test]
    fn test_word_truncation() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789";
        let word = WordConfig::new(long, Rgb::BLACK);
        assert_eq!(word.text.len(), MAX_TEXT_LEN);
        assert_eq!(word.as_run().text, &long[..MAX_TEXT_LEN]);

        // multi-byte chars are not split
        let accents = "é".repeat(20);
        let word = WordConfig::new(&accents, Rgb::BLACK);
        assert_eq!(word.text.chars().count(), 16);
    }
}
