//! Glyph strip addressing
//!
//! The strip is `height` lines of `line_size` bytes. Lines are stored
//! bottom first, and within a byte bit 7 (MSB) is the leftmost pixel.
//! Bits past the declared strip width are padding and never addressed.

/// Geometry of a glyph strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripLayout {
    /// Declared strip width in pixels
    pub width: usize,
    /// Bytes per strip line
    pub line_size: usize,
    /// Number of lines (glyph height)
    pub height: usize,
}

impl StripLayout {
    /// Number of addressable strip columns
    pub const fn columns(&self) -> usize {
        self.width
    }
}

/// Read one pixel of the strip
///
/// `px` is the horizontal strip column and `row` the glyph row counted
/// from the top. Returns `None` when the addressed byte lies past the end
/// of `strip` or the coordinates fall outside the layout.
pub fn strip_pixel(strip: &[u8], layout: &StripLayout, px: usize, row: usize) -> Option<bool> {
    if row >= layout.height || px >= layout.columns() || px / 8 >= layout.line_size {
        return None;
    }
    let col = px / 8;
    let bit = px % 8;
    let line = layout.height - 1 - row;
    let byte = *strip.get(line * layout.line_size + col)?;
    Some((byte << bit) & 0x80 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: StripLayout = StripLayout {
        width: 16,
        line_size: 2,
        height: 3,
    };

    // line 0 is the bottom row
    const STRIP: [u8; 6] = [
        0b1000_0000, 0b0000_0001, // bottom
        0b0100_0000, 0b0000_0000, // middle
        0b0000_0000, 0b1000_0000, // top
    ];

    #[test]
    fn test_msb_is_leftmost() {
        assert_eq!(strip_pixel(&STRIP, &LAYOUT, 0, 2), Some(true));
        assert_eq!(strip_pixel(&STRIP, &LAYOUT, 1, 2), Some(false));
        assert_eq!(strip_pixel(&STRIP, &LAYOUT, 15, 2), Some(true));
    }

    #[test]
    fn test_lines_are_bottom_first() {
        assert_eq!(strip_pixel(&STRIP, &LAYOUT, 8, 0), Some(true));
        assert_eq!(strip_pixel(&STRIP, &LAYOUT, 1, 1), Some(true));
        assert_eq!(strip_pixel(&STRIP, &LAYOUT, 0, 0), Some(false));
    }

    #[test]
    fn test_out_of_layout() {
        assert_eq!(strip_pixel(&STRIP, &LAYOUT, 16, 0), None);
        assert_eq!(strip_pixel(&STRIP, &LAYOUT, 0, 3), None);
    }

    #[test]
    fn test_padding_bits_not_addressed() {
        let narrow = StripLayout { width: 12, ..LAYOUT };
        assert_eq!(narrow.columns(), 12);
        assert_eq!(strip_pixel(&STRIP, &narrow, 11, 0), Some(false));
        // bit 15 is set in the bottom line but lies in the padding
        assert_eq!(strip_pixel(&STRIP, &narrow, 15, 2), None);
        assert_eq!(strip_pixel(&STRIP, &narrow, 12, 2), None);
    }

    #[test]
    fn test_width_past_line_size() {
        let wide = StripLayout { width: 24, ..LAYOUT };
        assert_eq!(strip_pixel(&STRIP, &wide, 16, 2), None);
    }

    #[test]
    fn test_truncated_strip() {
        // Top line missing entirely
        assert_eq!(strip_pixel(&STRIP[..4], &LAYOUT, 0, 0), None);
        assert_eq!(strip_pixel(&STRIP[..4], &LAYOUT, 0, 2), Some(true));
    }

    #[test]
    fn test_set_pixel_count_matches_bits() {
        let mut count = 0;
        for px in 0..LAYOUT.columns() {
            for row in 0..LAYOUT.height {
                if strip_pixel(&STRIP, &LAYOUT, px, row).unwrap() {
                    count += 1;
                }
            }
        }
        let bits: u32 = STRIP.iter().map(|b| b.count_ones()).sum();
        assert_eq!(count, bits as usize);
    }
}
