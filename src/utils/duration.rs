// src/utils/duration.rs

//! Human-readable remaining-time strings.

use chrono::TimeDelta;

/// Marker returned for any negative interval.
pub const EXPIRED: &str = "已过期";

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Format a signed interval in seconds as e.g. `3天5小时30分钟15秒`.
///
/// Negative input yields [`EXPIRED`]. Otherwise the whole seconds are split
/// into days, hours, minutes and seconds by floor division and every nonzero
/// unit is emitted in descending order. Seconds are always emitted when no
/// larger unit is, so the result is never empty.
pub fn format_remaining(delta_seconds: f64) -> String {
    if delta_seconds < 0.0 {
        return EXPIRED.to_string();
    }

    let total = delta_seconds.trunc() as i64;
    let days = total / SECONDS_PER_DAY;
    let hours = total % SECONDS_PER_DAY / SECONDS_PER_HOUR;
    let minutes = total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{days}天"));
    }
    if hours > 0 {
        out.push_str(&format!("{hours}小时"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}分钟"));
    }
    if seconds > 0 || out.is_empty() {
        out.push_str(&format!("{seconds}秒"));
    }
    out
}

/// Length of a fractional number of days in seconds.
pub fn days_to_seconds(days: f64) -> f64 {
    days * SECONDS_PER_DAY as f64
}

/// Whole days in a signed interval, rounded towards negative infinity.
pub fn whole_days(seconds: f64) -> i64 {
    (seconds / SECONDS_PER_DAY as f64).floor() as i64
}

/// Signed length of an interval in fractional seconds.
pub fn seconds_of(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 1000.0
}
