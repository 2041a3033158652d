//! Board-agnostic core for the Guilloche watch face firmware
//!
//! This crate contains everything that does not depend on specific
//! hardware:
//!
//! - Time sample types and the time source trait
//! - RGB565 color handling and the dial palette
//! - Pure clock-face geometry (hand/marker/ripple math)
//! - A software canvas rasterizer over a caller-provided pixel buffer
//! - Clock face composition (layers drawn back-to-front)
//! - The frame scheduler (tick decimation and flush orchestration)
//! - The `Panel` trait the display driver implements

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod canvas;
pub mod color;
pub mod face;
pub mod font;
pub mod geometry;
pub mod panel;
pub mod scheduler;
pub mod time;

// Re-export the types most callers need at the crate root
pub use canvas::Canvas;
pub use color::Rgb565;
pub use face::ClockFace;
pub use panel::{Panel, Region, RegionError};
pub use scheduler::FrameScheduler;
pub use time::{TimeSample, TimeSource};
