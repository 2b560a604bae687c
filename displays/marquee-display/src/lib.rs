//! Display-side types for color LED matrices
//!
//! This crate provides:
//! - `Rgb` packed 24-bit color
//! - `ColorBuffer` column-major off-screen pixel grid
//! - `DeviceFrame` flat frame in the order the hardware expects
//! - `FrameSink` trait for whatever pushes frames to the device
//! - `Compositor` that clips a buffer window into a device frame
//!
//! # Pixel order
//!
//! LED clusters are wired as vertical strips, so both buffers and frames
//! are column-major: pixel `(column, row)` of a frame lives at
//! `column * height + row`.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod backend;
pub mod buffer;
pub mod color;
pub mod compositor;
pub mod frame;

// Re-export key types
pub use backend::FrameSink;
pub use buffer::ColorBuffer;
pub use color::Rgb;
pub use compositor::Compositor;
pub use frame::{DeviceFrame, DisplayGeometry};
