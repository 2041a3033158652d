//! Render task
//!
//! Single cooperative task that ticks the frame scheduler at 60 Hz.
//! The scheduler decimates to one drawn frame per three ticks; the
//! off ticks only advance the counter, which keeps the cadence stable
//! even though a full-frame flush takes most of a tick.

use defmt::*;
use embassy_rp::peripherals::SPI1;
use embassy_time::{Duration, Ticker};

use guilloche_core::scheduler::{FrameScheduler, RENDER_DIVIDER, TICK_HZ};
use guilloche_drivers::Gc9a01;
use guilloche_hal_rp2040::{BusyDelay, RpOutput, RpSpiBus};

use crate::rtc::RtcClock;

/// Concrete display driver type for this board's wiring
pub type Display = Gc9a01<RpSpiBus<SPI1>, RpOutput, RpOutput, RpOutput, RpOutput, BusyDelay>;

/// Render task - ticks the scheduler and recovers the panel on faults
#[embassy_executor::task]
pub async fn render_task(
    mut scheduler: FrameScheduler<'static>,
    mut clock: RtcClock,
    mut display: Display,
) {
    info!(
        "Render task started: {} Hz tick, 1 frame per {} ticks",
        TICK_HZ, RENDER_DIVIDER
    );

    let mut ticker = Ticker::every(Duration::from_hz(TICK_HZ as u64));

    loop {
        ticker.next().await;

        if let Err(e) = scheduler.on_tick(&mut clock, &mut display) {
            warn!("frame flush failed: {}", e);
            // A bus fault leaves the controller write cursor in an
            // unknown state; a full re-init is the only way back.
            if let Err(e) = display.init() {
                error!("display re-init failed: {}", e);
            }
        }
    }
}
