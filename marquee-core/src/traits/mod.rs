//! Hardware abstraction traits
//!
//! Frames leave through [`marquee_display::FrameSink`]; pauses go through
//! [`embedded_hal::delay::DelayNs`]. The scheduler additionally needs a
//! monotonic time source.

pub mod clock;

pub use clock::Monotonic;
pub use embedded_hal::delay::DelayNs;
pub use marquee_display::FrameSink;
