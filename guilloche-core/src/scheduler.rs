//! Frame scheduler
//!
//! Owns the off-screen canvas and the render cadence. The host loop
//! calls [`FrameScheduler::on_tick`] at the tick rate; only every
//! [`RENDER_DIVIDER`]th tick samples the clock, composes the face and
//! flushes it through the panel. The decimation bounds serial-bus
//! bandwidth - a full-panel flush on every tick would starve the link.

use crate::canvas::Canvas;
use crate::face::ClockFace;
use crate::panel::{Panel, Region};
use crate::time::TimeSource;

/// Scheduler tick rate in Hz
pub const TICK_HZ: u32 = 60;

/// Render every Nth tick; effective frame rate is `TICK_HZ / N`
pub const RENDER_DIVIDER: u32 = 3;

/// Tick-driven render loop state
///
/// Exclusively owns the canvas; the pixel buffer is loaned to the
/// panel driver only for the duration of a flush.
pub struct FrameScheduler<'buf> {
    canvas: Canvas<'buf>,
    face: ClockFace,
    ticks: u32,
}

impl<'buf> FrameScheduler<'buf> {
    pub fn new(canvas: Canvas<'buf>, face: ClockFace) -> Self {
        Self {
            canvas,
            face,
            ticks: 0,
        }
    }

    /// Ticks seen since startup
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Advance one tick; render and flush when a frame is due
    ///
    /// Returns `Ok(true)` when a frame went out. Rendering is
    /// synchronous: a slow frame delays the next tick rather than
    /// dropping it.
    pub fn on_tick<T, P>(&mut self, clock: &mut T, panel: &mut P) -> Result<bool, P::Error>
    where
        T: TimeSource,
        P: Panel,
    {
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % RENDER_DIVIDER != 0 {
            return Ok(false);
        }

        let sample = clock.now();
        self.face.render(&mut self.canvas, &sample);

        let region = Region::full(self.canvas.width(), self.canvas.height());
        panel.set_window(region)?;
        panel.write_pixels(self.canvas.pixels())?;
        Ok(true)
    }
}
