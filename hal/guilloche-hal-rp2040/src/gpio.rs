//! GPIO output adapter for RP2040
//!
//! Wraps an embassy-rp [`Output`] in the shared [`OutputPin`] trait so
//! the display transport can drive its control lines without naming
//! embassy types.

use embassy_rp::gpio::Output;
use guilloche_hal::OutputPin;

/// Push-pull output pin backed by an RP2040 GPIO
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    /// Wrap an already-configured output
    ///
    /// The caller picks the initial level when constructing the
    /// embassy `Output`; this adapter does not touch it.
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
