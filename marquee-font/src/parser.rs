//! Font file parser
//!
//! Walks the glyph strip one column at a time and cuts it into glyphs at
//! the boundaries listed in the offset table.

use alloc::vec;
use alloc::vec::Vec;

use crate::header::{FontHeader, FormatError, HEADER_LEN};
use crate::strip::{strip_pixel, StripLayout};
use crate::table::{FontTable, Glyph};

/// Result of feeding one strip column to a [`GlyphAccumulator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feed {
    /// Column appended, current glyph still open
    Pending,
    /// Column closed the glyph with the given index in the offset table
    Flushed(usize),
    /// All boundaries consumed, further columns are ignored
    Complete,
}

/// State machine splitting strip columns into glyphs
///
/// State is the open glyph's per-row accumulators, the number of columns
/// gathered so far and the index of the next boundary. A glyph is flushed
/// when the strip column equal to the next boundary has been appended.
#[derive(Debug, Clone)]
pub struct GlyphAccumulator {
    rows: Vec<Vec<bool>>,
    columns: usize,
    boundaries: Vec<u16>,
    next: usize,
    glyphs: Vec<Glyph>,
}

impl GlyphAccumulator {
    /// Create an accumulator for glyphs `height` rows tall
    pub fn new(height: usize, boundaries: Vec<u16>) -> Self {
        Self {
            rows: vec![Vec::new(); height],
            columns: 0,
            glyphs: Vec::with_capacity(boundaries.len()),
            boundaries,
            next: 0,
        }
    }

    /// Whether every boundary has been consumed
    pub fn is_complete(&self) -> bool {
        self.next >= self.boundaries.len()
    }

    /// Columns gathered for the open glyph
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of glyphs flushed so far
    pub fn flushed(&self) -> usize {
        self.glyphs.len()
    }

    /// Append strip column `px`, one value per row from the top
    pub fn feed(&mut self, px: usize, column: &[bool]) -> Feed {
        if self.is_complete() {
            return Feed::Complete;
        }

        for (acc, &value) in self.rows.iter_mut().zip(column) {
            acc.push(value);
        }
        self.columns += 1;

        if px != self.boundaries[self.next] as usize {
            return Feed::Pending;
        }

        let height = self.rows.len();
        let rows = core::mem::replace(&mut self.rows, vec![Vec::new(); height]);
        self.glyphs.push(Glyph::from_rows(&rows));
        self.columns = 0;

        let index = self.next;
        self.next += 1;
        Feed::Flushed(index)
    }

    /// Finish and return one glyph per boundary
    ///
    /// Boundaries never reached yield zero-width glyphs.
    pub fn finish(mut self) -> Vec<Glyph> {
        let height = self.rows.len();
        self.glyphs
            .resize_with(self.boundaries.len(), || Glyph::empty(height));
        self.glyphs
    }
}

/// Parse a complete font file
pub fn parse(bytes: &[u8]) -> Result<FontTable, FormatError> {
    let header = FontHeader::parse(bytes)?;
    let strip_start = header.strip_start();
    if bytes.len() < strip_start {
        return Err(FormatError::TooShort);
    }

    let boundaries: Vec<u16> = bytes[HEADER_LEN..strip_start]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    let layout = StripLayout {
        width: header.strip_width as usize,
        line_size: header.line_size(),
        height: header.height as usize,
    };
    let strip = &bytes[strip_start..];

    let mut acc = GlyphAccumulator::new(layout.height, boundaries);
    let mut column = vec![false; layout.height];
    for px in 0..layout.columns() {
        if acc.is_complete() {
            break;
        }
        for (row, cell) in column.iter_mut().enumerate() {
            *cell = strip_pixel(strip, &layout, px, row).ok_or(FormatError::TruncatedStrip)?;
        }
        acc.feed(px, &column);
    }

    if !acc.is_complete() {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "font strip ended after {} of {} glyphs",
            acc.flushed(),
            header.char_count()
        );
    }

    let glyphs = acc.finish();
    let table = FontTable::new(layout.height, header.first, glyphs).with_metadata(
        header.baseline,
        header.version,
        header.bits_per_pixel,
    );

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "parsed font: codes {}..={}, height {}",
        table.first(),
        table.last(),
        table.height()
    );

    Ok(table)
}
