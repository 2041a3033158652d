//! Blocking SPI adapter for RP2040
//!
//! The panel link is write-only, so only the blocking TX path of
//! embassy-rp's SPI peripheral is exposed here.

use embassy_rp::spi::{self, Blocking, Instance, Spi};
use guilloche_hal::spi::{Mode, SpiBus, SpiConfig};

/// Write-only SPI master backed by an RP2040 SPI peripheral
pub struct RpSpiBus<T: Instance> {
    bus: Spi<'static, T, Blocking>,
}

impl<T: Instance> RpSpiBus<T> {
    /// Wrap a configured blocking SPI peripheral
    ///
    /// Construct the peripheral with `Spi::new_blocking_txonly` and a
    /// config from [`spi_config`].
    pub fn new(bus: Spi<'static, T, Blocking>) -> Self {
        Self { bus }
    }
}

impl<T: Instance> SpiBus for RpSpiBus<T> {
    type Error = spi::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.blocking_write(data)
    }
}

/// Translate the shared [`SpiConfig`] into an embassy-rp SPI config
pub fn spi_config(cfg: &SpiConfig) -> spi::Config {
    let mut out = spi::Config::default();
    out.frequency = cfg.frequency;
    let (polarity, phase) = match cfg.mode {
        Mode::Mode0 => (spi::Polarity::IdleLow, spi::Phase::CaptureOnFirstTransition),
        Mode::Mode1 => (spi::Polarity::IdleLow, spi::Phase::CaptureOnSecondTransition),
        Mode::Mode2 => (spi::Polarity::IdleHigh, spi::Phase::CaptureOnFirstTransition),
        Mode::Mode3 => (spi::Polarity::IdleHigh, spi::Phase::CaptureOnSecondTransition),
    };
    out.polarity = polarity;
    out.phase = phase;
    out
}
