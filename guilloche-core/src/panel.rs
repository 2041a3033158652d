//! Panel abstraction and addressable-window types
//!
//! The frame scheduler drives any display through this trait; the
//! GC9A01 driver in `guilloche-drivers` is the hardware implementation
//! and the tests use a recording mock.

use crate::color::Rgb565;

/// Errors from window validation
///
/// A malformed window must be rejected *before* any controller command
/// goes out, otherwise the controller's write cursor desynchronizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegionError {
    /// `x1 > x2` or `y1 > y2`
    NonMonotonic,
    /// Window extends past the panel edge
    OutOfBounds,
}

/// An addressable window in panel coordinates, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
}

impl Region {
    /// Validate and build a window against the panel dimensions
    pub fn new(
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        panel_width: u16,
        panel_height: u16,
    ) -> Result<Self, RegionError> {
        if x1 > x2 || y1 > y2 {
            return Err(RegionError::NonMonotonic);
        }
        if x2 >= panel_width || y2 >= panel_height {
            return Err(RegionError::OutOfBounds);
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// The full-panel window `{0, 0, width-1, height-1}`
    pub fn full(panel_width: u16, panel_height: u16) -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: panel_width.saturating_sub(1),
            y2: panel_height.saturating_sub(1),
        }
    }

    pub fn x1(&self) -> u16 {
        self.x1
    }

    pub fn y1(&self) -> u16 {
        self.y1
    }

    pub fn x2(&self) -> u16 {
        self.x2
    }

    pub fn y2(&self) -> u16 {
        self.y2
    }

    /// Exact number of pixels the controller expects after `RAMWR`
    pub fn pixel_count(&self) -> u32 {
        (self.x2 - self.x1 + 1) as u32 * (self.y2 - self.y1 + 1) as u32
    }
}

/// Display driver interface the scheduler renders through
pub trait Panel {
    /// Driver-specific error type
    type Error;

    /// Panel dimensions in pixels (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Arm an addressable window for a following pixel stream
    ///
    /// The caller must then supply exactly `region.pixel_count()` pixels
    /// via [`Panel::write_pixels`].
    fn set_window(&mut self, region: Region) -> Result<(), Self::Error>;

    /// Stream pixels into the armed window, high byte first on the wire
    fn write_pixels(&mut self, pixels: &[Rgb565]) -> Result<(), Self::Error>;

    /// Fill the full panel with one color
    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error>;

    /// Backlight level toggle
    fn set_backlight(&mut self, on: bool);
}
