//! Fixed-size font header

use core::fmt;

/// Two-byte file signature
pub const FONT_MAGIC: [u8; 2] = *b"YF";

/// Header size in bytes
pub const HEADER_LEN: usize = 10;

/// Errors that can occur while parsing a font file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Buffer ends before the header or the offset table
    TooShort,
    /// Signature is not `YF`
    BadMagic,
    /// Last character code is below the first one
    InvalidCharRange,
    /// Glyph height is zero
    ZeroHeight,
    /// Strip ends before all declared glyphs are complete
    TruncatedStrip,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FormatError::TooShort => "font file too short",
            FormatError::BadMagic => "invalid font file, YF signature expected",
            FormatError::InvalidCharRange => "last character code precedes first",
            FormatError::ZeroHeight => "font glyph height is zero",
            FormatError::TruncatedStrip => "glyph strip truncated",
        };
        f.write_str(msg)
    }
}

/// Decoded font header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontHeader {
    /// Format version
    pub version: u8,
    /// Bits per pixel (informational, strips are 1 bpp)
    pub bits_per_pixel: u8,
    /// Strip width in pixels
    pub strip_width: u16,
    /// Glyph height in pixels
    pub height: u8,
    /// Baseline row
    pub baseline: u8,
    /// First defined character code
    pub first: u8,
    /// Last defined character code
    pub last: u8,
}

impl FontHeader {
    /// Decode the header at the start of `bytes`
    pub fn parse(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() < HEADER_LEN {
            return Err(FormatError::TooShort);
        }
        if bytes[0..2] != FONT_MAGIC {
            return Err(FormatError::BadMagic);
        }

        let header = Self {
            version: bytes[2],
            bits_per_pixel: bytes[3],
            strip_width: u16::from_le_bytes([bytes[4], bytes[5]]),
            height: bytes[6],
            baseline: bytes[7],
            first: bytes[8],
            last: bytes[9],
        };

        if header.last < header.first {
            return Err(FormatError::InvalidCharRange);
        }
        if header.height == 0 {
            return Err(FormatError::ZeroHeight);
        }
        Ok(header)
    }

    /// Number of characters covered by the offset table
    pub fn char_count(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Bytes per strip line
    pub fn line_size(&self) -> usize {
        (self.strip_width as usize).div_ceil(8)
    }

    /// Offset of the glyph strip from the start of the file
    pub fn strip_start(&self) -> usize {
        HEADER_LEN + 2 * self.char_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes() -> [u8; HEADER_LEN] {
        [b'Y', b'F', 1, 1, 0x0C, 0x01, 8, 6, 0x20, 0x7E]
    }

    #[test]
    fn test_parse_header_fields() {
        let header = FontHeader::parse(&header_bytes()).unwrap();

        assert_eq!(header.version, 1);
        assert_eq!(header.bits_per_pixel, 1);
        assert_eq!(header.strip_width, 268); // little-endian 0x010C
        assert_eq!(header.height, 8);
        assert_eq!(header.baseline, 6);
        assert_eq!(header.first, b' ');
        assert_eq!(header.last, b'~');
        assert_eq!(header.char_count(), 95);
        assert_eq!(header.line_size(), 34);
        assert_eq!(header.strip_start(), HEADER_LEN + 190);
    }

    #[test]
    fn test_line_size_rounds_up() {
        let mut bytes = header_bytes();
        bytes[4] = 9;
        bytes[5] = 0;
        assert_eq!(FontHeader::parse(&bytes).unwrap().line_size(), 2);

        bytes[4] = 16;
        assert_eq!(FontHeader::parse(&bytes).unwrap().line_size(), 2);
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = header_bytes();
        bytes[1] = b'X';
        assert_eq!(FontHeader::parse(&bytes), Err(FormatError::BadMagic));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            FontHeader::parse(&header_bytes()[..9]),
            Err(FormatError::TooShort)
        );
        assert_eq!(FontHeader::parse(&[]), Err(FormatError::TooShort));
    }

    #[test]
    fn test_inverted_range() {
        let mut bytes = header_bytes();
        bytes[8] = 0x41;
        bytes[9] = 0x40;
        assert_eq!(
            FontHeader::parse(&bytes),
            Err(FormatError::InvalidCharRange)
        );
    }

    #[test]
    fn test_single_char_range() {
        let mut bytes = header_bytes();
        bytes[8] = b'A';
        bytes[9] = b'A';
        assert_eq!(FontHeader::parse(&bytes).unwrap().char_count(), 1);
    }

    #[test]
    fn test_zero_height() {
        let mut bytes = header_bytes();
        bytes[6] = 0;
        assert_eq!(FontHeader::parse(&bytes), Err(FormatError::ZeroHeight));
    }
}
