//! RP2040-specific HAL for the Guilloche firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `guilloche-hal` traits on top of embassy-rp:
//!
//! - [`gpio::RpOutput`] - push-pull output pins (DC, CS, RST, BL)
//! - [`spi::RpSpiBus`] - blocking write-only SPI master for the panel
//! - [`delay::BusyDelay`] - blocking delays from the embassy time driver
//!
//! The display transport and driver stay generic over the traits; this
//! crate is the only place the firmware names embassy-rp peripheral
//! types for the display wiring.

#![no_std]

pub mod delay;
pub mod gpio;
pub mod spi;

pub use delay::BusyDelay;
pub use gpio::RpOutput;
pub use spi::{spi_config, RpSpiBus};

// Re-export the shared SPI config so the firmware only names this crate
pub use guilloche_hal::spi::{Mode, SpiConfig};
