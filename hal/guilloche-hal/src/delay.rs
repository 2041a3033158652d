//! Blocking delay abstraction
//!
//! The GC9A01 reset and sleep-out sequences mandate minimum settle
//! times. These are busy/blocking waits by design - the transport is
//! single-threaded and must not yield mid-sequence.

/// Blocking delay source
pub trait DelayProvider {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}
