//! Blocking delays from the embassy time driver
//!
//! The display init sequence runs before the executor has anything
//! else to do, so busy-waiting here is fine and keeps the transport
//! free of async plumbing.

use embassy_time::{block_for, Duration};
use guilloche_hal::DelayProvider;

/// Busy-wait delay source
pub struct BusyDelay;

impl DelayProvider for BusyDelay {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }

    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }
}
