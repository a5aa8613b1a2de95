//! Date and clock display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around `Date` that formats as a short human-readable
/// calendar date, e.g. "Mar 01, 2026".
pub struct ShortDate(pub Date);

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%b %d, %Y"))
    }
}

/// A wrapper around an hour of day (0-23) that formats on a 12-hour
/// clock, e.g. "6 AM", "12 PM", "5 PM".
pub struct ClockHour(pub i8);

impl fmt::Display for ClockHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "12 AM"),
            12 => write!(f, "12 PM"),
            hour if hour < 12 => write!(f, "{hour} AM"),
            hour => write!(f, "{} PM", hour - 12),
        }
    }
}
