//! Parsed glyph storage

use alloc::vec::Vec;

/// Number of codes in the single-byte character set
pub const CHARSET_SIZE: usize = 256;

/// Pixel mask of one character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: usize,
    height: usize,
    /// Row-major pixels, `height` rows of `width` cells
    pixels: Vec<bool>,
}

impl Glyph {
    /// Build a glyph from its rows, top row first
    ///
    /// Every row must hold the same number of cells.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut pixels = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            debug_assert_eq!(row.len(), width);
            pixels.extend((0..width).map(|col| row.get(col).copied().unwrap_or(false)));
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A glyph with no columns
    pub fn empty(height: usize) -> Self {
        Self {
            width: 0,
            height,
            pixels: Vec::new(),
        }
    }

    /// Width in columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at `(col, row)` is set
    ///
    /// Coordinates outside the glyph read as unset.
    pub fn pixel(&self, col: usize, row: usize) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        self.pixels[row * self.width + col]
    }

    /// Iterate over the set pixels as `(col, row)`
    pub fn set_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| (i % width, i / width))
    }
}

/// Glyphs of one font, indexed by character code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTable {
    height: usize,
    baseline: u8,
    version: u8,
    bits_per_pixel: u8,
    first: u8,
    last: u8,
    glyphs: Vec<Option<Glyph>>,
}

impl FontTable {
    /// Create a table whose glyphs start at code `first`
    ///
    /// Glyphs past code 255 are dropped. An empty `glyphs` list yields a
    /// table with only `first` defined, at zero width.
    pub fn new(height: usize, first: u8, glyphs: Vec<Glyph>) -> Self {
        let count = glyphs.len().clamp(1, CHARSET_SIZE - first as usize);
        let last = first + (count - 1) as u8;

        let mut table: Vec<Option<Glyph>> = (0..CHARSET_SIZE).map(|_| None).collect();
        for (code, glyph) in (first as usize..).zip(glyphs) {
            if code >= CHARSET_SIZE {
                break;
            }
            table[code] = Some(glyph);
        }
        // every code in range is defined, even if never filled
        for slot in &mut table[first as usize..=last as usize] {
            if slot.is_none() {
                *slot = Some(Glyph::empty(height));
            }
        }

        Self {
            height,
            baseline: 0,
            version: 0,
            bits_per_pixel: 1,
            first,
            last,
            glyphs: table,
        }
    }

    pub(crate) fn with_metadata(mut self, baseline: u8, version: u8, bits_per_pixel: u8) -> Self {
        self.baseline = baseline;
        self.version = version;
        self.bits_per_pixel = bits_per_pixel;
        self
    }

    /// Glyph cell height shared by all glyphs
    pub fn height(&self) -> usize {
        self.height
    }

    /// Baseline row from the header
    pub fn baseline(&self) -> u8 {
        self.baseline
    }

    /// Format version from the header
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Bits per pixel from the header
    pub fn bits_per_pixel(&self) -> u8 {
        self.bits_per_pixel
    }

    /// First defined character code
    pub fn first(&self) -> u8 {
        self.first
    }

    /// Last defined character code
    pub fn last(&self) -> u8 {
        self.last
    }

    /// Whether `code` lies in the defined range
    pub fn contains(&self, code: u8) -> bool {
        (self.first..=self.last).contains(&code)
    }

    /// Glyph for `code`, `None` outside the defined range
    pub fn glyph(&self, code: u8) -> Option<&Glyph> {
        self.glyphs[code as usize].as_ref()
    }

    /// Advance width of `code`; undefined codes are zero wide
    pub fn width_of(&self, code: u8) -> usize {
        self.glyph(code).map_or(0, Glyph::width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_glyph_from_rows() {
        let glyph = Glyph::from_rows(&[[true, false, true], [false, true, false]]);

        assert_eq!(glyph.width(), 3);
        assert_eq!(glyph.height(), 2);
        assert!(glyph.pixel(0, 0));
        assert!(!glyph.pixel(1, 0));
        assert!(glyph.pixel(1, 1));
        assert!(!glyph.pixel(3, 0));
        assert!(!glyph.pixel(0, 2));
    }

    #[test]
    fn test_set_pixels() {
        let glyph = Glyph::from_rows(&[[false, true], [true, false]]);
        let set: Vec<_> = glyph.set_pixels().collect();
        assert_eq!(set, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_empty_glyph() {
        let glyph = Glyph::empty(8);
        assert_eq!(glyph.width(), 0);
        assert_eq!(glyph.height(), 8);
        assert_eq!(glyph.set_pixels().count(), 0);
    }

    #[test]
    fn test_table_range() {
        let glyphs = vec![Glyph::from_rows(&[[true]]), Glyph::from_rows(&[[true, true]])];
        let table = FontTable::new(1, b'A', glyphs);

        assert_eq!(table.first(), b'A');
        assert_eq!(table.last(), b'B');
        assert!(table.contains(b'B'));
        assert!(!table.contains(b'C'));
        assert_eq!(table.width_of(b'A'), 1);
        assert_eq!(table.width_of(b'B'), 2);
        assert_eq!(table.width_of(b'C'), 0);
        assert!(table.glyph(b'@').is_none());
    }

    #[test]
    fn test_table_truncates_past_charset() {
        let glyphs = vec![Glyph::empty(1), Glyph::empty(1), Glyph::empty(1)];
        let table = FontTable::new(1, 254, glyphs);
        assert_eq!(table.last(), 255);
        assert!(table.glyph(255).is_some());
    }
}
