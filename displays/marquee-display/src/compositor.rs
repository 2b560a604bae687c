//! Frame compositor
//!
//! Copies the part of a color buffer that falls on the display into a fresh
//! device frame. The buffer's top-left corner is placed at
//! `(offset_x, offset_y)` in display coordinates; anything outside the
//! display is clipped.

use core::ops::Range;

use crate::backend::FrameSink;
use crate::buffer::ColorBuffer;
use crate::frame::{DeviceFrame, DisplayGeometry};

/// Source indices of `len` cells placed at `offset` that land on `0..extent`
fn visible_range(len: usize, offset: i32, extent: usize) -> Range<usize> {
    let offset = i64::from(offset);
    let start = (-offset).clamp(0, len as i64);
    let stop = (extent as i64 - offset).clamp(start, len as i64);
    start as usize..stop as usize
}

/// Windowed, clipped copy of buffers into device frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Compositor {
    geometry: DisplayGeometry,
}

impl Compositor {
    /// Create a compositor for a display
    pub const fn new(geometry: DisplayGeometry) -> Self {
        Self { geometry }
    }

    pub const fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    /// Build the frame showing `buffer` at `(offset_x, offset_y)`
    ///
    /// Cells not covered by the buffer are black. A buffer entirely off the
    /// display yields a blank frame.
    pub fn composite(&self, buffer: &ColorBuffer, offset_x: i32, offset_y: i32) -> DeviceFrame {
        let mut frame = DeviceFrame::blank(self.geometry);
        let width = self.geometry.width as usize;
        let height = self.geometry.height as usize;

        let cols = visible_range(buffer.width(), offset_x, width);
        let rows = visible_range(buffer.height(), offset_y, height);
        if cols.is_empty() || rows.is_empty() {
            return frame;
        }

        // both ranges are non-empty, so the destination start is on screen
        let dst_col = (cols.start as i64 + i64::from(offset_x)) as usize;
        let dst_row = (rows.start as i64 + i64::from(offset_y)) as usize;
        let span = rows.len();

        let out = frame.as_mut_slice();
        for (i, col) in cols.enumerate() {
            let Some(src) = buffer.column(col) else {
                break;
            };
            let ofs = (dst_col + i) * height + dst_row;
            out[ofs..ofs + span].copy_from_slice(&src[rows.clone()]);
        }
        frame
    }

    /// Composite and hand the frame to `sink`
    pub fn show<S: FrameSink>(
        &self,
        sink: &mut S,
        buffer: &ColorBuffer,
        offset_x: i32,
        offset_y: i32,
    ) -> Result<(), S::Error> {
        let frame = self.composite(buffer, offset_x, offset_y);
        sink.present(frame.as_slice())
    }

    /// Present an all-black frame
    pub fn blank<S: FrameSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.present(DeviceFrame::blank(self.geometry).as_slice())
    }
}
