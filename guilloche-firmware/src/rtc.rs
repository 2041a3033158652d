//! Wall-clock source backed by the RP2040 RTC
//!
//! The RTC keeps time across the render loop but not across power
//! loss, so until a host programs it the clock runs from a fixed
//! power-on datetime. Reads can fail while the RTC divider is still
//! settling; the last good sample is kept and reused so the face
//! never snaps back to midnight mid-run.

use defmt::*;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use guilloche_core::{TimeSample, TimeSource};

/// Datetime programmed at power-on when the RTC is not yet running
fn power_on_datetime() -> DateTime {
    DateTime {
        year: 2026,
        month: 1,
        day: 1,
        day_of_week: DayOfWeek::Thursday,
        hour: 12,
        minute: 0,
        second: 0,
    }
}

pub struct RtcClock {
    rtc: Rtc<'static, RTC>,
    last: TimeSample,
}

impl RtcClock {
    pub fn new(mut rtc: Rtc<'static, RTC>) -> Self {
        if !rtc.is_running() {
            info!("RTC not running, programming power-on datetime");
            if rtc.set_datetime(power_on_datetime()).is_err() {
                warn!("RTC refused power-on datetime");
            }
        }
        Self {
            rtc,
            last: TimeSample::MIDNIGHT,
        }
    }
}

impl TimeSource for RtcClock {
    fn now(&mut self) -> TimeSample {
        match self.rtc.now() {
            Ok(dt) => {
                self.last = TimeSample {
                    hour: dt.hour,
                    minute: dt.minute,
                    second: dt.second,
                    day: dt.day,
                    month: dt.month,
                };
                self.last
            }
            Err(_) => self.last,
        }
    }
}
