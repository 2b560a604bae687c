//! Board-agnostic marquee logic
//!
//! This crate contains everything between a parsed font and a device frame
//! that does not depend on a specific LED controller:
//!
//! - Text rasterizer (measure and draw strings into color buffers)
//! - Animation scheduler (wall-clock scrolling and fixed-cadence flashing)
//! - Clock trait for the scheduler
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod animation;
pub mod config;
pub mod raster;
pub mod traits;

pub use animation::{Animator, ScrollState};
pub use raster::{RasterError, TextRun};
pub use traits::Monotonic;
