//! Utility functions and helpers.

pub mod duration;
pub mod http;
pub mod time;

pub use duration::{EXPIRED, days_to_seconds, format_remaining, whole_days};
pub use time::{Clock, FixedClock, SystemClock, parse_utc, to_local};
