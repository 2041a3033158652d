//! GPIO pin abstractions
//!
//! Provides a trait for the digital output pins the display transport
//! drives (data/command select, chip select, reset, backlight).

/// Digital output pin
///
/// Implementations handle the actual hardware register manipulation
/// for the specific chip. Setting a level is infallible; a pin that can
/// fail to change state has no recovery path at this layer anyway.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
