//! Frame sink trait
//!
//! Defines the interface to whatever drives the physical LEDs.

use crate::color::Rgb;

/// Consumer of complete device frames
///
/// Implementations push `colors` to the hardware in one write. The slice
/// always holds exactly `width * height` colors, addressed
/// `column * height + row`. Connection setup and retry policy belong to the
/// implementation.
pub trait FrameSink {
    /// Error raised when the device cannot be written
    type Error;

    /// Display a full frame
    fn present(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    type Error = S::Error;

    fn present(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        (**self).present(colors)
    }
}
