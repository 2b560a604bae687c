//! YF bitmap font files
//!
//! This crate parses the compact single-byte bitmap font format used by
//! small LED matrix displays into per-glyph pixel masks.
//!
//! # File layout
//!
//! All integers are little-endian:
//! ```text
//! ┌─────┬─────┬─────┬───────┬────────┬──────────┬───────┬──────┐
//! │ SIG │ VER │ BPP │ WIDTH │ HEIGHT │ BASELINE │ FIRST │ LAST │
//! │ 2B  │ 1B  │ 1B  │ 2B    │ 1B     │ 1B       │ 1B    │ 1B   │
//! └─────┴─────┴─────┴───────┴────────┴──────────┴───────┴──────┘
//! ┌────────────────────────────┬──────────────────────────────┐
//! │ OFFSETS (LAST-FIRST+1)×2B  │ STRIP  HEIGHT × ceil(W/8) B  │
//! └────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! The strip holds every glyph side by side. Each offset marks the last
//! strip column belonging to one character, in code order.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod header;
pub mod parser;
pub mod strip;
pub mod table;

pub use header::{FontHeader, FormatError, FONT_MAGIC, HEADER_LEN};
pub use parser::{parse, Feed, GlyphAccumulator};
pub use strip::{strip_pixel, StripLayout};
pub use table::{FontTable, Glyph, CHARSET_SIZE};
