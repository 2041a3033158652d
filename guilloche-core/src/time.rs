//! Time samples and the wall-clock source
//!
//! The scheduler polls a [`TimeSource`] once per due frame and hands the
//! resulting immutable [`TimeSample`] to the geometry engine.

/// A wall-clock snapshot
///
/// Captured once per render and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSample {
    /// Hour of day, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
    /// Day of month, 1-31
    pub day: u8,
    /// Month, 1-12 (values outside the range are guarded at lookup)
    pub month: u8,
}

impl TimeSample {
    /// Midnight on January 1st, the power-on value before the RTC is set
    pub const MIDNIGHT: TimeSample = TimeSample {
        hour: 0,
        minute: 0,
        second: 0,
        day: 1,
        month: 1,
    };
}

/// Read-only wall-clock source polled at the render cadence
pub trait TimeSource {
    /// Take a snapshot of the current time
    fn now(&mut self) -> TimeSample;
}

/// Three-letter month abbreviations for the date window
const MONTH_ABBREV: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Month abbreviation for a 1-based month index
///
/// Returns `None` for anything outside 1-12; the table is never indexed
/// with an unvalidated value.
pub fn month_abbrev(month: u8) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_ABBREV[month as usize - 1]),
        _ => None,
    }
}
