//! Device frames

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Rgb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pixel dimensions of the device grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayGeometry {
    /// Columns
    pub width: u16,
    /// Rows
    pub height: u16,
}

impl DisplayGeometry {
    /// Create a geometry
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of pixels in a frame
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for DisplayGeometry {
    /// Eight 8×8 panels side by side
    fn default() -> Self {
        Self::new(64, 8)
    }
}

/// One full frame, laid out `column * height + row`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFrame {
    geometry: DisplayGeometry,
    colors: Vec<Rgb>,
}

impl DeviceFrame {
    /// An all-black frame
    pub fn blank(geometry: DisplayGeometry) -> Self {
        Self {
            geometry,
            colors: vec![Rgb::BLACK; geometry.pixel_count()],
        }
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    /// Flat index of `(col, row)`
    pub fn index(&self, col: usize, row: usize) -> usize {
        col * self.geometry.height as usize + row
    }

    /// Color at `(col, row)`
    pub fn pixel(&self, col: usize, row: usize) -> Option<Rgb> {
        if col >= self.geometry.width as usize || row >= self.geometry.height as usize {
            return None;
        }
        Some(self.colors[self.index(col, row)])
    }

    /// Whether every pixel is unset
    pub fn is_blank(&self) -> bool {
        self.colors.iter().all(|c| c.is_black())
    }

    /// Colors in device order
    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.colors
    }
}
