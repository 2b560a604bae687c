//! Configuration types
//!
//! Describes the display and the two-part show. Parsing from text lives in
//! the application crate.

pub mod types;

pub use types::{
    DisplayConfig, FlashConfig, MarqueeConfig, ScrollConfig, WordConfig, MAX_TEXT_LEN, MAX_WORDS,
};
