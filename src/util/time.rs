//! Timestamp helpers for NetSentry.
//!
//! Provides consistent date/time display for feed consumers and an
//! injectable clock so generator tests can control event timestamps.

use chrono::{DateTime, Local, Utc};

/// Source of "now" for event timestamping.
///
/// The generator takes a `Clock` rather than calling `Utc::now()` directly so
/// tests can drive timestamps deterministically.
pub trait Clock: Send {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Format a UTC timestamp for display in a feed row.
///
/// Shows local time in `YYYY-MM-DD HH:MM:SS` format. This is the compact
/// format used where horizontal space is limited.
pub fn format_table_timestamp(ts: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = ts.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a UTC timestamp for a detail view.
///
/// Shows full precision including milliseconds and the UTC offset,
/// e.g. `2024-01-15 10:23:45.123 +00:00`.
pub fn format_detail_timestamp(ts: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = ts.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S%.3f %z").to_string()
}

/// Format a `std::time::Duration` into a human-readable string.
///
/// Used by the demo runner to report how long the feed ran.
/// Examples: `0.3s`, `1.2s`, `45.6s`.
pub fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.01 {
        format!("{:.1}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_millis() {
        let d = std::time::Duration::from_millis(5);
        let s = format_duration(d);
        assert!(s.contains("ms"), "Expected ms, got: {s}");
    }

    #[test]
    fn test_format_duration_seconds() {
        let d = std::time::Duration::from_millis(1200);
        let s = format_duration(d);
        assert_eq!(s, "1.2s");
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a, "System clock went backwards between calls");
    }
}
