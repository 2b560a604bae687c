//! Off-screen color buffer
//!
//! A string is rasterized once into a buffer as wide as the string, and the
//! compositor then shows windows of it.

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Rgb;

/// Column-major pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorBuffer {
    width: usize,
    height: usize,
    /// `width` columns of `height` pixels each
    pixels: Vec<Rgb>,
}

impl ColorBuffer {
    /// Create a buffer with every pixel unset
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
        }
    }

    /// Width in columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(col, row)` lies inside the buffer
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height
    }

    /// Color at `(col, row)`
    pub fn pixel(&self, col: usize, row: usize) -> Option<Rgb> {
        if !self.contains(col, row) {
            return None;
        }
        Some(self.pixels[col * self.height + row])
    }

    /// Mutable access to `(col, row)`
    pub fn pixel_mut(&mut self, col: usize, row: usize) -> Option<&mut Rgb> {
        if !self.contains(col, row) {
            return None;
        }
        Some(&mut self.pixels[col * self.height + row])
    }

    /// One vertical strip of pixels
    pub fn column(&self, col: usize) -> Option<&[Rgb]> {
        if col >= self.width {
            return None;
        }
        let start = col * self.height;
        Some(&self.pixels[start..start + self.height])
    }

    /// Iterate over the columns left to right
    pub fn columns(&self) -> impl Iterator<Item = &[Rgb]> {
        let height = self.height;
        (0..self.width).map(move |col| &self.pixels[col * height..(col + 1) * height])
    }

    /// Reset every pixel to unset
    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }
}
