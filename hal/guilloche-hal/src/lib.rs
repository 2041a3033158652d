//! Guilloche Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display transport and the
//! firmware are written against, so the same driver code runs on the
//! RP2040 target and under the host-side mocks used in unit tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  guilloche-drivers / guilloche-firmware │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  guilloche-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ guilloche-hal-│       │  test mocks   │
//! │    rp2040     │       │  (host only)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (DC, CS, RST, BL lines)
//! - [`spi::SpiBus`] - Write-only SPI master for the panel link
//! - [`delay::DelayProvider`] - Blocking delays for controller settle times

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelayProvider;
pub use gpio::OutputPin;
pub use spi::SpiBus;
