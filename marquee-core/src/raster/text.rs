//! String measurement and drawing

use marquee_display::{ColorBuffer, Rgb};
use marquee_font::FontTable;

use super::RasterError;

/// A piece of text drawn in one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub color: Rgb,
}

impl<'a> TextRun<'a> {
    pub const fn new(text: &'a str, color: Rgb) -> Self {
        Self { text, color }
    }
}

/// Map a character to its single-byte font code
fn char_code(ch: char) -> Result<u8, RasterError> {
    u8::try_from(ch).map_err(|_| RasterError::Domain { ch })
}

/// Pixel width of `text`
///
/// Codes the font does not define count as zero wide.
pub fn measure_width(font: &FontTable, text: &str) -> Result<usize, RasterError> {
    text.chars()
        .try_fold(0, |width, ch| Ok(width + font.width_of(char_code(ch)?)))
}

/// Pixel height of any string in `font`
pub fn measure_height(font: &FontTable) -> usize {
    font.height()
}

/// Draw `text` into `buffer` with its top-left corner at
/// `(origin_x, origin_y)`
///
/// Only set glyph pixels are written; the rest of the buffer is left
/// untouched, so several runs can share one buffer. The whole string is
/// validated before the first pixel is written. Returns the x coordinate
/// just past the last glyph.
pub fn draw(
    font: &FontTable,
    text: &str,
    buffer: &mut ColorBuffer,
    origin_x: usize,
    origin_y: usize,
    color: Rgb,
) -> Result<usize, RasterError> {
    let width = measure_width(font, text)?;
    if width > 0
        && (origin_x + width > buffer.width() || origin_y + font.height() > buffer.height())
    {
        return Err(RasterError::Bounds);
    }

    let mut cursor = origin_x;
    for ch in text.chars() {
        let Some(glyph) = font.glyph(char_code(ch)?) else {
            continue;
        };
        for (col, row) in glyph.set_pixels() {
            let pixel = buffer
                .pixel_mut(cursor + col, origin_y + row)
                .ok_or(RasterError::Bounds)?;
            *pixel = color;
        }
        cursor += glyph.width();
    }
    Ok(cursor)
}

/// Lay `runs` out left to right, without gaps, in a buffer of exactly the
/// combined size
pub fn compose(font: &FontTable, runs: &[TextRun<'_>]) -> Result<ColorBuffer, RasterError> {
    let width = runs.iter().try_fold(0, |total, run| {
        Ok::<_, RasterError>(total + measure_width(font, run.text)?)
    })?;

    let mut buffer = ColorBuffer::new(width, measure_height(font));
    let mut cursor = 0;
    for run in runs {
        cursor = draw(font, run.text, &mut buffer, cursor, 0, run.color)?;
    }
    Ok(buffer)
}

/// Rasterize a single-color string into a buffer of its own size
pub fn render(font: &FontTable, text: &str, color: Rgb) -> Result<ColorBuffer, RasterError> {
    compose(font, &[TextRun::new(text, color)])
}
