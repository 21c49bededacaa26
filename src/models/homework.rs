//! Derived homework data produced by a deadline scan.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Remaining-time view of one homework item, built fresh on every scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeworkInfo {
    /// Stable identity used for novelty detection
    pub id: String,

    pub course_name: String,

    /// Teacher nickname
    pub teacher: String,

    pub title: String,

    pub category: String,

    /// Deadline exactly as the portal sent it
    pub end_time: String,

    /// Deadline in the reference offset
    pub end_time_local: DateTime<FixedOffset>,

    /// Whole days left, floored (negative once overdue)
    pub days_remaining: i64,

    /// Signed seconds left
    pub seconds_remaining: f64,

    /// Human-readable remaining time, or the expired marker
    pub remaining_time: String,

    pub is_submitted: bool,
}

impl HomeworkInfo {
    /// Due within `threshold_seconds` (inclusive), not overdue, and not submitted.
    pub fn is_upcoming(&self, threshold_seconds: f64) -> bool {
        self.seconds_remaining >= 0.0
            && self.seconds_remaining <= threshold_seconds
            && !self.is_submitted
    }

    /// Short status used in log lines for items that are not upcoming.
    pub fn status(&self) -> String {
        if self.seconds_remaining < 0.0 {
            "已过期".to_string()
        } else if self.is_submitted {
            "已提交".to_string()
        } else {
            format!("剩余时间：{}", self.remaining_time)
        }
    }
}

/// Persisted document listing every homework item seen in a scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllHomework {
    pub all_homework: Vec<HomeworkInfo>,
}

/// Persisted document listing only upcoming-actionable items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpcomingHomework {
    pub upcoming_homework: Vec<HomeworkInfo>,
}

/// A homework record that could not be processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub id: String,
    pub course_name: String,
    pub title: String,
    pub reason: String,
}

/// Summary of one completed scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Upcoming-actionable items in iteration order
    pub upcoming: Vec<HomeworkInfo>,

    /// Number of items recorded in the all-homework document
    pub total: usize,

    /// Ids not present in the previously known set
    pub new_ids: Vec<String>,

    /// Previously known ids absent from this scan
    pub forgotten_ids: Vec<String>,

    /// Records dropped because their deadline could not be parsed
    pub skipped: Vec<SkippedRecord>,

    /// Notifications that could not be delivered
    pub notify_failures: usize,

    /// Storage keys that could not be written
    pub write_failures: Vec<String>,
}

impl ScanReport {
    pub fn has_upcoming(&self) -> bool {
        !self.upcoming.is_empty()
    }

    /// True when every record, notification and write succeeded.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.notify_failures == 0 && self.write_failures.is_empty()
    }
}

/// Result of a scan invocation.
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    /// The scan ran to completion
    Completed(ScanReport),
    /// The course provider returned nothing; no output was written
    NoData,
}

impl ScanOutcome {
    /// Upcoming items, empty for `NoData`.
    pub fn upcoming(&self) -> &[HomeworkInfo] {
        match self {
            ScanOutcome::Completed(report) => &report.upcoming,
            ScanOutcome::NoData => &[],
        }
    }

    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            ScanOutcome::Completed(report) => Some(report),
            ScanOutcome::NoData => None,
        }
    }
}
