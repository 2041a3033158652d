//! Display drivers for Guilloche
//!
//! Currently one driver: the GC9A01 round-LCD controller behind the
//! 240x240 panel, split into the byte-level serial transport and the
//! command-table driver on top of it. Both are generic over the
//! `guilloche-hal` traits so the unit tests run against recording
//! mocks on the host.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod gc9a01;
pub mod transport;

pub use gc9a01::{Gc9a01, Gc9a01Error};
pub use transport::SpiTransport;
