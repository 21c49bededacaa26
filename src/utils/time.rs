// src/utils/time.rs

//! Deadline timestamp parsing and fixed-offset conversion.
//!
//! The portal sends deadlines as UTC ISO-8601 strings with a trailing `Z`.
//! Display and comparison happen in a constant reference offset (UTC+8 by
//! default); there is no DST handling and no timezone database.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{AppError, Result};

const SECONDS_PER_HOUR: i32 = 3600;

/// Build a fixed offset from whole hours east of UTC.
pub fn fixed_offset(offset_hours: i32) -> Result<FixedOffset> {
    offset_hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| AppError::config(format!("UTC offset out of range: {offset_hours}h")))
}

/// Parse a `Z`-suffixed UTC timestamp into an offset-aware instant.
///
/// A trailing `Z` is read as `+00:00`. Explicit offsets are accepted too,
/// as is a space instead of `T` between date and time.
pub fn parse_utc(value: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::parse(value, "empty timestamp"));
    }

    let normalized = match trimmed.strip_suffix('Z').or_else(|| trimmed.strip_suffix('z')) {
        Some(head) => format!("{head}+00:00"),
        None => trimmed.to_string(),
    };

    DateTime::parse_from_rfc3339(&normalized)
        .or_else(|_| DateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S%.f%:z"))
        .map_err(|e| AppError::parse(value, e))
}

/// Convert an instant to the given fixed UTC offset.
pub fn to_local<Tz: chrono::TimeZone>(
    instant: &DateTime<Tz>,
    offset_hours: i32,
) -> Result<DateTime<FixedOffset>> {
    Ok(instant.with_timezone(&fixed_offset(offset_hours)?))
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current instant expressed in a fixed offset from [`fixed_offset`].
    fn now(&self, offset: &FixedOffset) -> DateTime<FixedOffset> {
        self.now_utc().with_timezone(offset)
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for replays and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Freeze the clock at a `Z`-suffixed timestamp.
    pub fn at(value: &str) -> Result<Self> {
        Ok(Self(parse_utc(value)?.with_timezone(&Utc)))
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
