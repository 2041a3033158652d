//! Guilloche - analog watch face firmware
//!
//! Main firmware binary for RP2040 boards driving a round GC9A01
//! panel. Renders an analog clock face - tapered hands, hour markers,
//! a guilloché ripple background and a date window - at a fixed
//! 60 Hz tick with every third tick drawn.
//!
//! Named after the guilloché engraving pattern on watch dials.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::rtc::Rtc;
use embassy_rp::spi::Spi;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use guilloche_core::color::BLACK;
use guilloche_core::geometry::Point;
use guilloche_core::{Canvas, ClockFace, FrameScheduler, Rgb565};
use guilloche_drivers::gc9a01;
use guilloche_drivers::{Gc9a01, SpiTransport};
use guilloche_hal_rp2040::{spi_config, BusyDelay, RpOutput, RpSpiBus, SpiConfig};

mod rtc;
mod tasks;

const FRAME_PIXELS: usize = gc9a01::WIDTH as usize * gc9a01::HEIGHT as usize;

// Frame buffer lives forever; the render task borrows it via the canvas
static FRAME: StaticCell<[Rgb565; FRAME_PIXELS]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Guilloche firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // SPI1 write-only at 40 MHz: CLK=GPIO10, MOSI=GPIO11
    let spi = Spi::new_blocking_txonly(
        p.SPI1,
        p.PIN_10,
        p.PIN_11,
        spi_config(&SpiConfig::default()),
    );

    // Control lines: DC=GPIO8, CS=GPIO9, RST=GPIO12, BL=GPIO13
    // DC/CS/RST idle high, backlight off until init completes
    let transport = SpiTransport::new(
        RpSpiBus::new(spi),
        RpOutput::new(Output::new(p.PIN_8, Level::High)),
        RpOutput::new(Output::new(p.PIN_9, Level::High)),
        RpOutput::new(Output::new(p.PIN_12, Level::High)),
        RpOutput::new(Output::new(p.PIN_13, Level::Low)),
        BusyDelay,
    );

    let mut display = Gc9a01::new(transport);
    display.init().unwrap();
    info!("GC9A01 initialized");

    let clock = rtc::RtcClock::new(Rtc::new(p.RTC));

    let buf = FRAME.init([BLACK; FRAME_PIXELS]);
    let canvas = Canvas::new(buf, gc9a01::WIDTH, gc9a01::HEIGHT);
    let face = ClockFace::new(
        Point {
            x: gc9a01::WIDTH as f32 / 2.0,
            y: gc9a01::HEIGHT as f32 / 2.0,
        },
        gc9a01::WIDTH as f32 / 2.0,
    );
    let scheduler = FrameScheduler::new(canvas, face);

    spawner
        .spawn(tasks::render_task(scheduler, clock, display))
        .unwrap();
    info!("Render task spawned, firmware running");
}
