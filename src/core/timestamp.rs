//! Timestamp formatting utilities
//!
//! Log lines are stamped with the current local time rendered through a
//! strftime pattern. The time source is a [`Clock`] so tests can pin it.

use chrono::{DateTime, FixedOffset, Local, TimeZone};
use std::fmt::Write;

/// Default time pattern: `18-10-2026 14:05:09`
pub const DEFAULT_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Source of the current time for log timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// Clock frozen at a single instant
///
/// # Examples
///
/// ```
/// use rust_console_log::core::{Clock, FixedClock};
///
/// let clock = FixedClock::utc(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(clock.now().format("%H:%M").to_string(), "10:30");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Build a clock at the given UTC wall time, `None` if the date is invalid
    pub fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        let utc = FixedOffset::east_opt(0)?;
        let instant = utc
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()?;
        Some(Self::new(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

/// Render `datetime` with a strftime `pattern`
///
/// A pattern chrono cannot interpret is returned verbatim instead of
/// panicking, so a bad format never takes a log call down.
#[must_use]
pub fn format_timestamp(datetime: &DateTime<FixedOffset>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    if write!(out, "{}", datetime.format(pattern)).is_err() {
        return pattern.to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> DateTime<FixedOffset> {
        FixedClock::utc(2025, 1, 8, 10, 30, 45)
            .expect("valid datetime")
            .now()
    }

    #[test]
    fn test_default_format() {
        assert_eq!(
            format_timestamp(&fixed(), DEFAULT_TIME_FORMAT),
            "08-01-2025 10:30:45"
        );
    }

    #[test]
    fn test_custom_format() {
        assert_eq!(format_timestamp(&fixed(), "%Y/%m/%d %H:%M"), "2025/01/08 10:30");
    }

    #[test]
    fn test_custom_apache_format() {
        assert_eq!(
            format_timestamp(&fixed(), "%d/%b/%Y:%H:%M:%S %z"),
            "08/Jan/2025:10:30:45 +0000"
        );
    }

    #[test]
    fn test_invalid_format_falls_back_to_pattern() {
        assert_eq!(format_timestamp(&fixed(), "%Q oops"), "%Q oops");
    }

    #[test]
    fn test_fixed_clock_rejects_bad_date() {
        assert!(FixedClock::utc(2025, 2, 30, 0, 0, 0).is_none());
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
