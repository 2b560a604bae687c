//! Animation scheduler
//!
//! Drives the compositor repeatedly to move or blink a pre-rasterized
//! buffer. Both animations block until they are done; there is no
//! cancellation.

pub mod animator;
pub mod flash;
pub mod scroll;

pub use animator::Animator;
pub use flash::{centered_offset, flash_offsets, DEFAULT_PAUSE_MS};
pub use scroll::ScrollState;
